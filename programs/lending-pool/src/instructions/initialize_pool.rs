use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::events::PoolInitialized;
use crate::state::{PoolConfig, PoolState};
use crate::utils::{current_timestamp, pull_lamports};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = PoolState::DISCRIMINATOR.len() + PoolState::INIT_SPACE,
        seeds = [PoolState::SEED_PREFIX],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    /// Holds deposited lamports; owned by the system program, signed for by seeds
    #[account(
        mut,
        seeds = [PoolState::PRINCIPAL_VAULT_SEED, pool_state.key().as_ref()],
        bump
    )]
    pub principal_vault: SystemAccount<'info>,

    #[account(
        mint::token_program = token_program
    )]
    pub collateral_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = authority,
        token::mint = collateral_mint,
        token::authority = pool_state,
        token::token_program = token_program,
        seeds = [PoolState::COLLATERAL_VAULT_SEED, pool_state.key().as_ref()],
        bump
    )]
    pub collateral_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(&mut self, bumps: &InitializePoolBumps, config: PoolConfig) -> Result<()> {
        config.validate()?;
        let now = current_timestamp()?;

        let mut pool = PoolState::genesis(self.authority.key(), self.collateral_mint.key(), config, now);
        pool.bump = bumps.pool_state;
        pool.principal_vault_bump = bumps.principal_vault;
        pool.collateral_vault_bump = bumps.collateral_vault;
        self.pool_state.set_inner(pool);

        // Payouts never dip below this, so the vault account is never reaped
        let rent_exempt = Rent::get()?.minimum_balance(0);
        pull_lamports(
            self.system_program.to_account_info(),
            self.authority.to_account_info(),
            self.principal_vault.to_account_info(),
            rent_exempt.saturating_sub(self.principal_vault.lamports()),
        )?;

        msg!(
            "Pool initialized: ltv {}%, rate {}%, liquidation threshold {}%",
            config.ltv_percentage,
            config.interest_rate_percentage,
            config.liquidation_threshold_percentage
        );
        emit!(PoolInitialized {
            authority: self.authority.key(),
            collateral_mint: self.collateral_mint.key(),
            ltv_percentage: config.ltv_percentage,
            interest_rate_percentage: config.interest_rate_percentage,
            liquidation_threshold_percentage: config.liquidation_threshold_percentage,
            timestamp: now,
        });

        Ok(())
    }
}
