use anchor_lang::prelude::*;
use crate::ledger;
use crate::state::{BorrowRecord, DepositRecord, PoolState, PriceFeed};
use crate::utils::{current_timestamp, load_record, read_price_feed, PriceOracle};

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetPendingYield<'info> {
    #[account(
        seeds = [PoolState::SEED_PREFIX],
        bump = pool_state.bump,
    )]
    pub pool_state: Account<'info, PoolState>,

    /// CHECK: may not exist; read through `load_record`
    #[account(
        seeds = [DepositRecord::SEED_PREFIX, user.as_ref()],
        bump,
    )]
    pub deposit_record: UncheckedAccount<'info>,
}

impl<'info> GetPendingYield<'info> {
    pub fn pending_yield(&self) -> Result<u128> {
        let record = load_record::<DepositRecord>(&self.deposit_record.to_account_info())?;
        ledger::pending_yield_of(&self.pool_state, record.as_ref())
    }
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetDebt<'info> {
    #[account(
        seeds = [PoolState::SEED_PREFIX],
        bump = pool_state.bump,
    )]
    pub pool_state: Account<'info, PoolState>,

    /// CHECK: may not exist; read through `load_record`
    #[account(
        seeds = [BorrowRecord::SEED_PREFIX, user.as_ref()],
        bump,
    )]
    pub borrow_record: UncheckedAccount<'info>,
}

impl<'info> GetDebt<'info> {
    pub fn debt(&self) -> Result<u128> {
        let now = current_timestamp()?;
        let record = load_record::<BorrowRecord>(&self.borrow_record.to_account_info())?;
        ledger::debt_of(&self.pool_state, record.as_ref(), now)
    }
}

#[derive(Accounts)]
pub struct GetCollateralPrice<'info> {
    #[account(
        seeds = [PoolState::SEED_PREFIX],
        bump = pool_state.bump,
    )]
    pub pool_state: Account<'info, PoolState>,

    /// CHECK: may not be initialized yet; read through `read_price_feed`
    #[account(
        seeds = [PriceFeed::SEED_PREFIX, pool_state.key().as_ref()],
        bump,
    )]
    pub price_feed: UncheckedAccount<'info>,
}

impl<'info> GetCollateralPrice<'info> {
    pub fn price(&self) -> Result<u128> {
        read_price_feed(&self.price_feed.to_account_info())?.get_price()
    }
}
