use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::errors::PoolError;
use crate::events::Borrowed;
use crate::ledger;
use crate::state::{BorrowRecord, CollateralRecord, PoolState, PriceFeed};
use crate::utils::{current_timestamp, pull_tokens, push_lamports, read_price_feed};

#[derive(Accounts)]
pub struct Borrow<'info> {
    #[account(mut)]
    pub borrower: Signer<'info>,

    #[account(
        mut,
        seeds = [PoolState::SEED_PREFIX],
        bump = pool_state.bump,
    )]
    pub pool_state: Box<Account<'info, PoolState>>,

    #[account(
        constraint = collateral_mint.key() == pool_state.collateral_mint @ PoolError::InvalidCollateralAsset,
        mint::token_program = token_program,
    )]
    pub collateral_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = borrower,
        token::token_program = token_program,
    )]
    pub borrower_collateral_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [PoolState::COLLATERAL_VAULT_SEED, pool_state.key().as_ref()],
        bump = pool_state.collateral_vault_bump,
    )]
    pub collateral_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [PoolState::PRINCIPAL_VAULT_SEED, pool_state.key().as_ref()],
        bump = pool_state.principal_vault_bump,
    )]
    pub principal_vault: SystemAccount<'info>,

    /// CHECK: may not be initialized yet; read through `read_price_feed`
    #[account(
        seeds = [PriceFeed::SEED_PREFIX, pool_state.key().as_ref()],
        bump,
    )]
    pub price_feed: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = borrower,
        space = BorrowRecord::DISCRIMINATOR.len() + BorrowRecord::INIT_SPACE,
        seeds = [BorrowRecord::SEED_PREFIX, borrower.key().as_ref()],
        bump,
    )]
    pub borrow_record: Box<Account<'info, BorrowRecord>>,

    #[account(
        init_if_needed,
        payer = borrower,
        space = CollateralRecord::DISCRIMINATOR.len() + CollateralRecord::INIT_SPACE,
        seeds = [CollateralRecord::SEED_PREFIX, borrower.key().as_ref()],
        bump,
    )]
    pub collateral_record: Box<Account<'info, CollateralRecord>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Borrow<'info> {
    pub fn borrow(&mut self, bumps: &BorrowBumps, collateral_amount: u64, amount: u64) -> Result<()> {
        let now = current_timestamp()?;
        let oracle = read_price_feed(&self.price_feed.to_account_info())?;

        let total_debt = ledger::borrow(
            &mut self.pool_state,
            &mut self.borrow_record,
            &mut self.collateral_record,
            self.borrower.key(),
            collateral_amount as u128,
            amount as u128,
            &oracle,
            now,
        )?;
        self.borrow_record.bump = bumps.borrow_record;
        self.collateral_record.bump = bumps.collateral_record;

        pull_tokens(
            self.token_program.to_account_info(),
            self.borrower_collateral_account.to_account_info(),
            &self.collateral_mint,
            self.collateral_vault.to_account_info(),
            self.borrower.to_account_info(),
            collateral_amount,
        )?;

        let pool_key = self.pool_state.key();
        let vault_seeds: &[&[&[u8]]] = &[&[
            PoolState::PRINCIPAL_VAULT_SEED,
            pool_key.as_ref(),
            &[self.pool_state.principal_vault_bump],
        ]];
        push_lamports(
            self.system_program.to_account_info(),
            self.principal_vault.to_account_info(),
            self.borrower.to_account_info(),
            amount,
            vault_seeds,
        )?;

        msg!(
            "Borrow of {} against {} collateral by {}, debt now {}",
            amount,
            collateral_amount,
            self.borrower.key(),
            total_debt
        );
        emit!(Borrowed {
            borrower: self.borrower.key(),
            collateral_amount: collateral_amount as u128,
            amount: amount as u128,
            total_debt,
            timestamp: now,
        });

        Ok(())
    }
}
