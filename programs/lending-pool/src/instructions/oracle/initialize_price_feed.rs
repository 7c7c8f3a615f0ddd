use anchor_lang::prelude::*;
use crate::errors::PoolError;
use crate::state::{PoolState, PriceFeed};

#[derive(Accounts)]
pub struct InitializePriceFeed<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PoolState::SEED_PREFIX],
        bump = pool_state.bump,
        constraint = pool_state.authority == authority.key() @ PoolError::Unauthorized,
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        init,
        payer = authority,
        space = PriceFeed::DISCRIMINATOR.len() + PriceFeed::INIT_SPACE,
        seeds = [PriceFeed::SEED_PREFIX, pool_state.key().as_ref()],
        bump
    )]
    pub price_feed: Account<'info, PriceFeed>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePriceFeed<'info> {
    pub fn initialize_price_feed(&mut self, bumps: &InitializePriceFeedBumps, updater: Pubkey) -> Result<()> {
        // No price until the updater publishes one
        self.price_feed.set_inner(PriceFeed {
            authority: self.authority.key(),
            updater,
            price: 0,
            updated_at: Clock::get()?.unix_timestamp,
            bump: bumps.price_feed,
        });

        msg!("Price feed initialized, updater {}", updater);
        Ok(())
    }
}
