use anchor_lang::prelude::*;
use crate::errors::PoolError;
use crate::state::PriceFeed;
use crate::utils::load_record;

/// Source of the collateral price, in principal units per collateral unit.
pub trait PriceOracle {
    fn get_price(&self) -> Result<u128>;
}

impl PriceOracle for PriceFeed {
    fn get_price(&self) -> Result<u128> {
        // A feed that was never updated has no usable price
        require!(self.price > 0, PoolError::InvalidOracle);
        Ok(self.price as u128)
    }
}

/// A feed account that does not exist yet reads as an uninitialized oracle.
impl<T: PriceOracle> PriceOracle for Option<T> {
    fn get_price(&self) -> Result<u128> {
        match self {
            Some(oracle) => oracle.get_price(),
            None => err!(PoolError::InvalidOracle),
        }
    }
}

/// Read the pool's price feed account, if it has been initialized.
pub fn read_price_feed(price_feed: &AccountInfo) -> Result<Option<PriceFeed>> {
    load_record::<PriceFeed>(price_feed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(price: u64) -> PriceFeed {
        PriceFeed {
            authority: Pubkey::new_unique(),
            updater: Pubkey::new_unique(),
            price,
            updated_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn test_feed_price() {
        assert_eq!(feed(123_456).get_price().unwrap(), 123_456);
    }

    #[test]
    fn test_zero_price_is_unavailable() {
        assert_eq!(feed(0).get_price().unwrap_err(), PoolError::InvalidOracle.into());
    }

    #[test]
    fn test_missing_feed_is_invalid_oracle() {
        let missing: Option<PriceFeed> = None;
        assert_eq!(missing.get_price().unwrap_err(), PoolError::InvalidOracle.into());
        assert_eq!(Some(feed(2)).get_price().unwrap(), 2);
    }
}
