use anchor_lang::prelude::*;
use crate::constants::PERCENT_DENOMINATOR;
use crate::errors::PoolError;

/// Collateral value in principal units at the oracle price.
pub fn calculate_collateral_value(collateral_amount: u128, price: u128) -> Result<u128> {
    collateral_amount
        .checked_mul(price)
        .ok_or(PoolError::MathOverflow.into())
}

/// Maximum principal borrowable against `collateral_value`.
pub fn calculate_max_borrow(collateral_value: u128, ltv_percentage: u16) -> Result<u128> {
    let max = collateral_value
        .checked_mul(ltv_percentage as u128)
        .ok_or(PoolError::MathOverflow)?
        / PERCENT_DENOMINATOR;

    Ok(max)
}

/// Liquidatable once debt reaches `threshold_percentage` of collateral value.
/// debt * 100 >= collateral_value * threshold
pub fn is_liquidatable(
    debt_value: u128,
    collateral_value: u128,
    threshold_percentage: u16,
) -> Result<bool> {
    let scaled_debt = debt_value
        .checked_mul(PERCENT_DENOMINATOR)
        .ok_or(PoolError::MathOverflow)?;
    let scaled_collateral = collateral_value
        .checked_mul(threshold_percentage as u128)
        .ok_or(PoolError::MathOverflow)?;

    Ok(scaled_debt >= scaled_collateral)
}

/// Calculate health factor
/// Health Factor = (collateral_value / debt_value), in basis points
/// HF > 10000 = healthy under a 100% threshold
pub fn calculate_health_factor(collateral_value: u128, debt_value: u128) -> Result<u128> {
    if debt_value == 0 {
        // No debt = infinite health
        return Ok(u128::MAX);
    }

    let health_factor = collateral_value
        .checked_mul(10000)
        .and_then(|v| v.checked_div(debt_value))
        .ok_or(PoolError::MathOverflow)?;

    Ok(health_factor)
}
