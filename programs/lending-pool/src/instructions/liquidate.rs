use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::errors::PoolError;
use crate::events::Liquidated;
use crate::ledger;
use crate::state::{BorrowRecord, CollateralRecord, PoolState, PriceFeed};
use crate::utils::{current_timestamp, push_tokens, read_price_feed, to_native_amount};

#[derive(Accounts)]
pub struct Liquidate<'info> {
    #[account(mut)]
    pub liquidator: Signer<'info>,

    /// Position owner; record rent goes back here when an open position is closed
    #[account(mut)]
    pub borrower: SystemAccount<'info>,

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

    /// Liquidator receives the seized collateral here
    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = liquidator,
        token::token_program = token_program,
    )]
    pub liquidator_collateral_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [PoolState::COLLATERAL_VAULT_SEED, pool_state.key().as_ref()],
        bump = pool_state.collateral_vault_bump,
    )]
    pub collateral_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: may not be initialized yet; read through `read_price_feed`
    #[account(
        seeds = [PriceFeed::SEED_PREFIX, pool_state.key().as_ref()],
        bump,
    )]
    pub price_feed: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = liquidator,
        space = BorrowRecord::DISCRIMINATOR.len() + BorrowRecord::INIT_SPACE,
        seeds = [BorrowRecord::SEED_PREFIX, borrower.key().as_ref()],
        bump,
    )]
    pub borrow_record: Box<Account<'info, BorrowRecord>>,

    #[account(
        init_if_needed,
        payer = liquidator,
        space = CollateralRecord::DISCRIMINATOR.len() + CollateralRecord::INIT_SPACE,
        seeds = [CollateralRecord::SEED_PREFIX, borrower.key().as_ref()],
        bump,
    )]
    pub collateral_record: Box<Account<'info, CollateralRecord>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Liquidate<'info> {
    pub fn liquidate(&mut self) -> Result<()> {
        let now = current_timestamp()?;
        let oracle = read_price_feed(&self.price_feed.to_account_info())?;

        let settlement = ledger::liquidate(
            &mut self.pool_state,
            &mut self.borrow_record,
            &mut self.collateral_record,
            &oracle,
            now,
        )?;

        let pool_seeds: &[&[&[u8]]] = &[&[PoolState::SEED_PREFIX, &[self.pool_state.bump]]];
        push_tokens(
            self.token_program.to_account_info(),
            self.collateral_vault.to_account_info(),
            &self.collateral_mint,
            self.liquidator_collateral_account.to_account_info(),
            self.pool_state.to_account_info(),
            to_native_amount(settlement.collateral)?,
            pool_seeds,
        )?;

        // Records the liquidator just paid for go back to the liquidator
        let rent_to = if settlement.had_position {
            self.borrower.to_account_info()
        } else {
            self.liquidator.to_account_info()
        };
        self.borrow_record.close(rent_to.clone())?;
        self.collateral_record.close(rent_to)?;

        msg!(
            "Liquidated {}: {} debt cleared, {} collateral to {}",
            self.borrower.key(),
            settlement.debt,
            settlement.collateral,
            self.liquidator.key()
        );
        emit!(Liquidated {
            liquidator: self.liquidator.key(),
            borrower: self.borrower.key(),
            debt_cleared: settlement.debt,
            collateral_seized: settlement.collateral,
            timestamp: now,
        });

        Ok(())
    }
}
