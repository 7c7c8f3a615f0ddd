use anchor_lang::prelude::*;
use crate::errors::PoolError;
use crate::events::PriceUpdated;
use crate::state::{PoolState, PriceFeed};

#[derive(Accounts)]
pub struct UpdatePrice<'info> {
    pub updater: Signer<'info>,

    #[account(
        seeds = [PoolState::SEED_PREFIX],
        bump = pool_state.bump,
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        seeds = [PriceFeed::SEED_PREFIX, pool_state.key().as_ref()],
        bump = price_feed.bump,
        constraint = price_feed.updater == updater.key() @ PoolError::Unauthorized,
    )]
    pub price_feed: Account<'info, PriceFeed>,
}

impl<'info> UpdatePrice<'info> {
    pub fn update_price(&mut self, price: u64) -> Result<()> {
        let timestamp = Clock::get()?.unix_timestamp;
        self.price_feed.price = price;
        self.price_feed.updated_at = timestamp;

        msg!("Collateral price set to {}", price);
        emit!(PriceUpdated {
            updater: self.updater.key(),
            price,
            timestamp,
        });
        Ok(())
    }
}
