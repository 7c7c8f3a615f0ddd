use anchor_lang::prelude::*;
use crate::events::Withdrawn;
use crate::ledger;
use crate::state::{DepositRecord, PoolState};
use crate::utils::{current_timestamp, push_lamports, to_native_amount};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [PoolState::SEED_PREFIX],
        bump = pool_state.bump,
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        seeds = [PoolState::PRINCIPAL_VAULT_SEED, pool_state.key().as_ref()],
        bump = pool_state.principal_vault_bump,
    )]
    pub principal_vault: SystemAccount<'info>,

    /// Created empty when missing so the ledger can reject the withdrawal
    /// with its own error; a failed instruction rolls the creation back.
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

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        let now = current_timestamp()?;

        let withdrawal = ledger::withdraw(
            &mut self.pool_state,
            Some(&mut *self.deposit_record),
            amount as u128,
            now,
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
            self.depositor.to_account_info(),
            to_native_amount(withdrawal.amount)?,
            vault_seeds,
        )?;

        if withdrawal.closed {
            self.deposit_record.close(self.depositor.to_account_info())?;
        }

        msg!(
            "Withdrawal of {} ({} yield) by {}, {} left",
            withdrawal.amount,
            withdrawal.yield_paid,
            self.depositor.key(),
            withdrawal.remaining
        );
        emit!(Withdrawn {
            depositor: self.depositor.key(),
            amount: withdrawal.amount,
            yield_paid: withdrawal.yield_paid,
            yield_reinvested: withdrawal.yield_reinvested,
            remaining: withdrawal.remaining,
            timestamp: now,
        });

        Ok(())
    }
}
