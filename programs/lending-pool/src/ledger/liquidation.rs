use anchor_lang::prelude::*;
use crate::errors::PoolError;
use crate::ledger::Settlement;
use crate::state::{BorrowRecord, CollateralRecord, PoolState};
use crate::utils::{
    accrue_interest, borrower_debt, calculate_collateral_value, calculate_health_factor,
    is_liquidatable, scaled_debt, PriceOracle,
};

/// Seize the whole position once its debt reaches the liquidation threshold.
///
/// The liquidator receives all collateral; the borrower's debt is written off
/// against the pool. There is no partial liquidation.
pub fn liquidate(
    pool: &mut PoolState,
    borrow_record: &mut BorrowRecord,
    collateral_record: &mut CollateralRecord,
    oracle: &impl PriceOracle,
    now: u64,
) -> Result<Settlement> {
    let mut staged = pool.clone();
    accrue_interest(&mut staged, now)?;

    let price = oracle.get_price()?;
    let scaled = scaled_debt(borrow_record)?;
    let debt = borrower_debt(borrow_record, staged.borrow_index)?;
    let collateral_value = calculate_collateral_value(collateral_record.amount, price)?;

    if !is_liquidatable(debt, collateral_value, staged.config.liquidation_threshold_percentage)? {
        msg!(
            "Position healthy: debt {} against collateral value {} (health factor {} bps)",
            debt,
            collateral_value,
            calculate_health_factor(collateral_value, debt)?
        );
        return err!(PoolError::CannotBeLiquidated);
    }

    let settlement = Settlement {
        debt,
        collateral: collateral_record.amount,
        had_position: borrow_record.is_active(),
    };
    staged.close_borrow(scaled, settlement.collateral)?;

    borrow_record.clear();
    collateral_record.clear();

    *pool = staged;
    Ok(settlement)
}
