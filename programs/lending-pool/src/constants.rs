use anchor_lang::prelude::*;

/// Maximum borrow as a percentage of collateral value.
#[constant]
pub const LTV_PERCENTAGE: u16 = 70;

/// Annual interest rate on outstanding borrows, applied at each accrual.
#[constant]
pub const INTEREST_RATE_PERCENTAGE: u16 = 10;

/// Debt/collateral ratio (percent) at which a position may be liquidated.
#[constant]
pub const LIQUIDATION_THRESHOLD_PERCENTAGE: u16 = 100;

/// 365.2425 days.
#[constant]
pub const SECONDS_PER_YEAR: u64 = 31_556_952;

/// The cumulative yield index is kept in basis points.
pub const YIELD_INDEX_PRECISION: u128 = 10_000;

/// Fixed-point scale of the borrow index; the index starts at 1.0.
pub const BORROW_INDEX_PRECISION: u128 = 1_000_000_000_000;

/// `total_deposits` starts here so share math never divides by zero.
pub const INITIAL_TOTAL_DEPOSITS: u128 = 1;

pub const PERCENT_DENOMINATOR: u128 = 100;
