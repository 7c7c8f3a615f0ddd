use anchor_lang::prelude::*;
use crate::events::Deposited;
use crate::ledger;
use crate::state::{DepositRecord, PoolState};
use crate::utils::{current_timestamp, pull_lamports};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [PoolState::SEED_PREFIX],
        bump = pool_state.bump
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        seeds = [PoolState::PRINCIPAL_VAULT_SEED, pool_state.key().as_ref()],
        bump = pool_state.principal_vault_bump
    )]
    pub principal_vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = DepositRecord::DISCRIMINATOR.len() + DepositRecord::INIT_SPACE,
        seeds = [DepositRecord::SEED_PREFIX, depositor.key().as_ref()],
        bump,
    )]
    pub deposit_record: Account<'info, DepositRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, bumps: &DepositBumps, amount: u64) -> Result<()> {
        let now = current_timestamp()?;

        ledger::deposit(
            &mut self.pool_state,
            &mut self.deposit_record,
            self.depositor.key(),
            amount as u128,
            now,
        )?;
        self.deposit_record.bump = bumps.deposit_record;

        if amount == 0 {
            // Nothing was opened; hand back the rent of the empty record
            self.deposit_record.close(self.depositor.to_account_info())?;
            return Ok(());
        }

        pull_lamports(
            self.system_program.to_account_info(),
            self.depositor.to_account_info(),
            self.principal_vault.to_account_info(),
            amount,
        )?;

        msg!(
            "Deposit of {} by {}, pool principal now {}",
            amount,
            self.depositor.key(),
            self.pool_state.depositor_principal()
        );
        emit!(Deposited {
            depositor: self.depositor.key(),
            amount: amount as u128,
            yield_index: self.deposit_record.yield_index_snapshot,
            timestamp: now,
        });

        Ok(())
    }
}
