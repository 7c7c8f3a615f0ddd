#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

mod constants;
mod errors;
mod events;
mod instructions;
mod ledger;
mod state;
mod utils;


use instructions::*;
use state::PoolConfig;

declare_id!("9mRvT2At1fAcKUWoV5Bo9jToiiJJgjSrkPT7jVwTLekS");

#[program]
pub mod lending_pool {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, config: PoolConfig) -> Result<()> {
        ctx.accounts.initialize_pool(&ctx.bumps, config)
    }

    pub fn initialize_price_feed(ctx: Context<InitializePriceFeed>, updater: Pubkey) -> Result<()> {
        ctx.accounts.initialize_price_feed(&ctx.bumps, updater)
    }

    pub fn update_price(ctx: Context<UpdatePrice>, price: u64) -> Result<()> {
        ctx.accounts.update_price(price)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(&ctx.bumps, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(amount)
    }

    pub fn borrow(
        ctx: Context<Borrow>,
        collateral_amount: u64,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.borrow(&ctx.bumps, collateral_amount, amount)
    }

    /// Repays the caller's whole debt and returns their collateral
    pub fn repay(ctx: Context<Repay>) -> Result<()> {
        ctx.accounts.repay()
    }

    pub fn liquidate(ctx: Context<Liquidate>) -> Result<()> {
        ctx.accounts.liquidate()
    }

    pub fn get_pending_yield(ctx: Context<GetPendingYield>, _user: Pubkey) -> Result<u128> {
        ctx.accounts.pending_yield()
    }

    pub fn get_debt(ctx: Context<GetDebt>, _user: Pubkey) -> Result<u128> {
        ctx.accounts.debt()
    }

    pub fn get_collateral_price(ctx: Context<GetCollateralPrice>) -> Result<u128> {
        ctx.accounts.price()
    }
}
