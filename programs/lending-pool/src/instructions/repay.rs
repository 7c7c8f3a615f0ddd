use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::errors::PoolError;
use crate::events::Repaid;
use crate::ledger;
use crate::state::{BorrowRecord, CollateralRecord, PoolState};
use crate::utils::{current_timestamp, pull_lamports, push_tokens, to_native_amount};

#[derive(Accounts)]
pub struct Repay<'info> {
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

    /// Repaying without a loan is allowed and settles nothing; the empty
    /// records created here are closed again before the instruction ends.
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

impl<'info> Repay<'info> {
    pub fn repay(&mut self) -> Result<()> {
        let now = current_timestamp()?;

        let settlement = ledger::repay(
            &mut self.pool_state,
            &mut self.borrow_record,
            &mut self.collateral_record,
            now,
        )?;

        pull_lamports(
            self.system_program.to_account_info(),
            self.borrower.to_account_info(),
            self.principal_vault.to_account_info(),
            to_native_amount(settlement.debt)?,
        )?;

        let pool_seeds: &[&[&[u8]]] = &[&[PoolState::SEED_PREFIX, &[self.pool_state.bump]]];
        push_tokens(
            self.token_program.to_account_info(),
            self.collateral_vault.to_account_info(),
            &self.collateral_mint,
            self.borrower_collateral_account.to_account_info(),
            self.pool_state.to_account_info(),
            to_native_amount(settlement.collateral)?,
            pool_seeds,
        )?;

        self.borrow_record.close(self.borrower.to_account_info())?;
        self.collateral_record.close(self.borrower.to_account_info())?;

        msg!(
            "Repayment of {} by {}, {} collateral returned",
            settlement.debt,
            self.borrower.key(),
            settlement.collateral
        );
        emit!(Repaid {
            borrower: self.borrower.key(),
            amount: settlement.debt,
            collateral_returned: settlement.collateral,
            timestamp: now,
        });

        Ok(())
    }
}
