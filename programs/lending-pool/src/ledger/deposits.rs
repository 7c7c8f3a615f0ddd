use anchor_lang::prelude::*;
use crate::errors::PoolError;
use crate::state::{DepositRecord, PoolState};
use crate::utils::{accrue_interest, pending_yield};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    /// Lamports paid out
    pub amount: u128,
    /// Portion of `amount` that was yield rather than principal
    pub yield_paid: u128,
    /// Unpaid yield folded into principal; `total_deposits` grows by this
    pub yield_reinvested: u128,
    /// Principal left on the record
    pub remaining: u128,
    /// Whether the record was emptied and should be closed
    pub closed: bool,
}

/// Open a deposit. A depositor holds at most one live record.
pub fn deposit(
    pool: &mut PoolState,
    record: &mut DepositRecord,
    depositor: Pubkey,
    amount: u128,
    now: u64,
) -> Result<()> {
    require!(!record.is_live(), PoolError::MustWithdrawBeforeNewDeposit);

    let mut staged = pool.clone();
    accrue_interest(&mut staged, now)?;

    if amount > 0 {
        staged.add_deposits(amount)?;
        record.open(depositor, amount, staged.cumulative_yield_index);
    }

    *pool = staged;
    Ok(())
}

/// Withdraw up to principal plus pending yield.
///
/// Yield is paid first. Whatever balance is left becomes the new principal
/// and starts earning from the current index.
pub fn withdraw(
    pool: &mut PoolState,
    record: Option<&mut DepositRecord>,
    amount: u128,
    now: u64,
) -> Result<Withdrawal> {
    let mut staged = pool.clone();
    accrue_interest(&mut staged, now)?;

    let record = match record {
        Some(record) if record.is_live() => record,
        _ => return err!(PoolError::InvalidWithdrawAmount),
    };

    let earned = pending_yield(record, staged.cumulative_yield_index)?;
    let balance = record.amount
        .checked_add(earned)
        .ok_or(PoolError::MathOverflow)?;
    require!(amount <= balance, PoolError::InvalidWithdrawAmount);

    if amount == 0 {
        *pool = staged;
        return Ok(Withdrawal {
            amount: 0,
            yield_paid: 0,
            yield_reinvested: 0,
            remaining: record.amount,
            closed: false,
        });
    }

    // Net change is `remaining - record.amount`. It is positive when less than
    // the pending yield is withdrawn, since the rest of the yield becomes principal.
    let remaining = balance - amount;
    staged.remove_deposits(record.amount)?;
    staged.add_deposits(remaining)?;

    let yield_paid = amount.min(earned);
    let withdrawal = Withdrawal {
        amount,
        yield_paid,
        yield_reinvested: earned - yield_paid,
        remaining,
        closed: remaining == 0,
    };

    if withdrawal.closed {
        record.clear();
    } else {
        record.rebase(remaining, staged.cumulative_yield_index);
    }

    *pool = staged;
    Ok(withdrawal)
}

/// Read-only view against the stored index; no accrual is projected.
pub fn pending_yield_of(pool: &PoolState, record: Option<&DepositRecord>) -> Result<u128> {
    match record {
        Some(record) => pending_yield(record, pool.cumulative_yield_index),
        None => Ok(0),
    }
}
