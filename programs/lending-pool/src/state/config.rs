use anchor_lang::prelude::*;
use crate::constants::{
    INTEREST_RATE_PERCENTAGE, LIQUIDATION_THRESHOLD_PERCENTAGE, LTV_PERCENTAGE, SECONDS_PER_YEAR,
};
use crate::errors::PoolError;

/// Protocol parameters, fixed when the pool is initialized.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct PoolConfig {
    /// Maximum loan-to-value ratio (percent, 70 = 70%)
    pub ltv_percentage: u16,

    /// Annual interest on borrows (percent), charged at each accrual
    pub interest_rate_percentage: u16,

    /// Debt/collateral ratio at which positions become liquidatable (percent)
    pub liquidation_threshold_percentage: u16,

    /// Length of the interest year in seconds
    pub seconds_per_year: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            ltv_percentage: LTV_PERCENTAGE,
            interest_rate_percentage: INTEREST_RATE_PERCENTAGE,
            liquidation_threshold_percentage: LIQUIDATION_THRESHOLD_PERCENTAGE,
            seconds_per_year: SECONDS_PER_YEAR,
        }
    }
}

impl PoolConfig {
    pub fn validate_thresholds(&self) -> bool {
        self.ltv_percentage > 0 && self.liquidation_threshold_percentage > self.ltv_percentage
    }

    pub fn validate(&self) -> Result<()> {
        require!(self.validate_thresholds(), PoolError::InvalidPoolConfig);
        require!(self.seconds_per_year > 0, PoolError::InvalidPoolConfig);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_protocol_constants() {
        let config = PoolConfig::default();
        assert_eq!(config.ltv_percentage, 70);
        assert_eq!(config.interest_rate_percentage, 10);
        assert_eq!(config.liquidation_threshold_percentage, 100);
        assert_eq!(config.seconds_per_year, 31_556_952);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = PoolConfig {
            ltv_percentage: 100,
            liquidation_threshold_percentage: 90,
            ..PoolConfig::default()
        };
        assert_eq!(config.validate().unwrap_err(), PoolError::InvalidPoolConfig.into());
    }

    #[test]
    fn test_rejects_zero_ltv_and_zero_year() {
        let zero_ltv = PoolConfig { ltv_percentage: 0, ..PoolConfig::default() };
        assert!(zero_ltv.validate().is_err());

        let zero_year = PoolConfig { seconds_per_year: 0, ..PoolConfig::default() };
        assert!(zero_year.validate().is_err());
    }

    #[test]
    fn test_accepts_extreme_rates() {
        let config = PoolConfig {
            interest_rate_percentage: u16::MAX,
            seconds_per_year: 1,
            ..PoolConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
