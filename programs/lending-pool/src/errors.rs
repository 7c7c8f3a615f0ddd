use anchor_lang::prelude::*;

/// On-chain codes are `6000 + code()`; everything below 6000 belongs to Anchor.
#[error_code(offset = 6100)]
pub enum PoolError {
    #[msg("Withdraw amount exceeds balance or no deposit exists")]
    InvalidWithdrawAmount,

    #[msg("Borrow exceeds the maximum loan-to-value limit")]
    ExceededMaxBorrow,

    #[msg("Position is not eligible for liquidation")]
    CannotBeLiquidated,

    #[msg("Existing deposit must be withdrawn before a new one")]
    MustWithdrawBeforeNewDeposit,

    #[msg("Price oracle is not initialized or price is unavailable")]
    InvalidOracle,

    #[msg("Collateral mint does not match the configured asset")]
    InvalidCollateralAsset,

    #[msg("Invalid DEX program reference")]
    InvalidDexProgram,

    #[msg("Math overflow occurred")]
    MathOverflow,

    #[msg("Total deposits fell below the initial floor")]
    DepositFloorBreached,

    #[msg("Invalid pool configuration")]
    InvalidPoolConfig,

    #[msg("Unauthorized: signer is not allowed to perform this action")]
    Unauthorized,

    #[msg("Principal vault has insufficient liquidity")]
    InsufficientLiquidity,

    #[msg("Cluster clock returned a negative timestamp")]
    InvalidTimestamp,
}

impl PoolError {
    /// Protocol-level code, without Anchor's custom error base.
    pub fn code(&self) -> u32 {
        100 + *self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_codes() {
        assert_eq!(PoolError::InvalidWithdrawAmount.code(), 100);
        assert_eq!(PoolError::ExceededMaxBorrow.code(), 101);
        assert_eq!(PoolError::CannotBeLiquidated.code(), 102);
        assert_eq!(PoolError::MustWithdrawBeforeNewDeposit.code(), 103);
        assert_eq!(PoolError::InvalidOracle.code(), 104);
        assert_eq!(PoolError::InvalidCollateralAsset.code(), 105);
        assert_eq!(PoolError::InvalidDexProgram.code(), 106);
    }

    #[test]
    fn test_on_chain_codes_follow_offset() {
        assert_eq!(u32::from(PoolError::InvalidWithdrawAmount), 6100);
        assert_eq!(u32::from(PoolError::InvalidCollateralAsset), 6105);
    }
}
