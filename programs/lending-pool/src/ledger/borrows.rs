use anchor_lang::prelude::*;
use crate::errors::PoolError;
use crate::ledger::Settlement;
use crate::state::{BorrowRecord, CollateralRecord, PoolState};
use crate::utils::{
    accrue_interest, borrower_debt, calculate_collateral_value, calculate_max_borrow,
    projected_borrow_index, scale_debt, scaled_debt, PriceOracle,
};

/// Post collateral and draw principal against it. Returns the borrower's
/// total debt after the draw.
#[allow(clippy::too_many_arguments)]
pub fn borrow(
    pool: &mut PoolState,
    borrow_record: &mut BorrowRecord,
    collateral_record: &mut CollateralRecord,
    borrower: Pubkey,
    collateral_amount: u128,
    principal: u128,
    oracle: &impl PriceOracle,
    now: u64,
) -> Result<u128> {
    let mut staged = pool.clone();
    accrue_interest(&mut staged, now)?;

    let price = oracle.get_price()?;
    let collateral_value = calculate_collateral_value(collateral_amount, price)?;
    let max_borrow = calculate_max_borrow(collateral_value, staged.config.ltv_percentage)?;
    if principal > max_borrow {
        msg!("Requested {} exceeds max borrow {}", principal, max_borrow);
        return err!(PoolError::ExceededMaxBorrow);
    }

    // Roll any existing loan forward to now before adding to it
    let borrow_index = staged.borrow_index;
    let old_scaled = scaled_debt(borrow_record)?;
    let debt = borrower_debt(borrow_record, borrow_index)?
        .checked_add(principal)
        .ok_or(PoolError::MathOverflow)?;
    let new_scaled = scale_debt(debt, borrow_index)?;
    let posted = collateral_record.amount
        .checked_add(collateral_amount)
        .ok_or(PoolError::MathOverflow)?;

    staged.open_borrow(old_scaled, new_scaled, collateral_amount)?;

    borrow_record.borrower = borrower;
    borrow_record.principal_owed = debt;
    borrow_record.borrow_index_snapshot = borrow_index;
    borrow_record.last_accrued_time = now;
    collateral_record.borrower = borrower;
    collateral_record.amount = posted;

    *pool = staged;
    Ok(debt)
}

/// Clear the borrower's debt in full and release all collateral.
/// Without an open position this settles nothing.
pub fn repay(
    pool: &mut PoolState,
    borrow_record: &mut BorrowRecord,
    collateral_record: &mut CollateralRecord,
    now: u64,
) -> Result<Settlement> {
    let mut staged = pool.clone();
    accrue_interest(&mut staged, now)?;

    let scaled = scaled_debt(borrow_record)?;
    let settlement = Settlement {
        debt: borrower_debt(borrow_record, staged.borrow_index)?,
        collateral: collateral_record.amount,
        had_position: borrow_record.is_active(),
    };
    staged.close_borrow(scaled, settlement.collateral)?;

    borrow_record.clear();
    collateral_record.clear();

    *pool = staged;
    Ok(settlement)
}

/// Debt at `now`, projecting the borrow index past the last accrual.
pub fn debt_of(pool: &PoolState, record: Option<&BorrowRecord>, now: u64) -> Result<u128> {
    match record {
        Some(record) => borrower_debt(record, projected_borrow_index(pool, now)?),
        None => Ok(0),
    }
}
