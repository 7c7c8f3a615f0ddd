use anchor_lang::prelude::*;

/// Collateral price quoted in lamports per collateral base unit.
#[account]
#[derive(InitSpace, Debug)]
pub struct PriceFeed {
    pub authority: Pubkey,
    pub updater: Pubkey,
    pub price: u64,
    pub updated_at: i64,
    pub bump: u8,
}

impl PriceFeed {
    pub const SEED_PREFIX: &'static [u8] = b"price_feed";
}
