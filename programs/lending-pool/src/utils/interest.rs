use anchor_lang::prelude::*;
use crate::constants::{BORROW_INDEX_PRECISION, PERCENT_DENOMINATOR, YIELD_INDEX_PRECISION};
use crate::errors::PoolError;
use crate::state::{BorrowRecord, DepositRecord, PoolState};

/// Simple annual interest over `elapsed` seconds.
/// interest = principal * rate_pct * elapsed / (100 * seconds_per_year)
pub fn simple_interest(
    principal: u128,
    rate_percentage: u16,
    elapsed: u64,
    seconds_per_year: u64,
) -> Result<u128> {
    if principal == 0 || elapsed == 0 {
        return Ok(0);
    }

    let numerator = principal
        .checked_mul(rate_percentage as u128)
        .and_then(|v| v.checked_mul(elapsed as u128))
        .ok_or(PoolError::MathOverflow)?;
    let denominator = PERCENT_DENOMINATOR
        .checked_mul(seconds_per_year as u128)
        .ok_or(PoolError::MathOverflow)?;

    Ok(numerator / denominator)
}

/// Borrow index the pool would reach at `now`. Only moves while loans are open.
pub fn projected_borrow_index(pool: &PoolState, now: u64) -> Result<u128> {
    if now <= pool.last_accrual_time || pool.scaled_borrows == 0 {
        return Ok(pool.borrow_index);
    }

    let growth = simple_interest(
        pool.borrow_index,
        pool.config.interest_rate_percentage,
        now - pool.last_accrual_time,
        pool.config.seconds_per_year,
    )?;

    pool.borrow_index
        .checked_add(growth)
        .ok_or(PoolError::MathOverflow.into())
}

/// Lamports owed by `scaled` borrow units at `borrow_index`, rounded down.
pub fn debt_at(scaled: u128, borrow_index: u128) -> Result<u128> {
    Ok(scaled
        .checked_mul(borrow_index)
        .ok_or(PoolError::MathOverflow)?
        / BORROW_INDEX_PRECISION)
}

/// Borrow units representing `debt` at `borrow_index`, rounded up so the
/// pool never records less than was lent.
pub fn scale_debt(debt: u128, borrow_index: u128) -> Result<u128> {
    require!(borrow_index > 0, PoolError::MathOverflow);
    let numerator = debt
        .checked_mul(BORROW_INDEX_PRECISION)
        .ok_or(PoolError::MathOverflow)?;

    Ok(numerator.div_ceil(borrow_index))
}

/// Bring the pool's indexes and borrows up to `now`.
/// Returns the interest accrued; a no-op when no time has passed.
///
/// Interest compounds at every accrual. Borrower debt is read through the
/// same borrow index, so the sum of open loans never exceeds `total_borrows`
/// and the last repayment brings it back to zero.
pub fn accrue_interest(pool: &mut PoolState, now: u64) -> Result<u128> {
    if now <= pool.last_accrual_time {
        return Ok(0);
    }

    let elapsed = now - pool.last_accrual_time;
    let borrow_index = projected_borrow_index(pool, now)?;
    let outstanding = debt_at(pool.scaled_borrows, borrow_index)?;
    let accrued = outstanding
        .checked_sub(pool.total_borrows)
        .ok_or(PoolError::MathOverflow)?;

    if accrued > 0 {
        let index_delta = accrued
            .checked_mul(YIELD_INDEX_PRECISION)
            .ok_or(PoolError::MathOverflow)?
            / pool.total_deposits;

        pool.cumulative_yield_index = pool.cumulative_yield_index
            .checked_add(index_delta)
            .ok_or(PoolError::MathOverflow)?;

        msg!(
            "Accrued {} over {}s, yield index now {}",
            accrued,
            elapsed,
            pool.cumulative_yield_index
        );
    }

    pool.borrow_index = borrow_index;
    pool.total_borrows = outstanding;
    pool.last_accrual_time = now;
    Ok(accrued)
}

/// Yield earned by a deposit since its snapshot.
pub fn pending_yield(record: &DepositRecord, yield_index: u128) -> Result<u128> {
    if !record.is_live() {
        return Ok(0);
    }

    let index_growth = yield_index
        .checked_sub(record.yield_index_snapshot)
        .ok_or(PoolError::MathOverflow)?;

    Ok(record.amount
        .checked_mul(index_growth)
        .ok_or(PoolError::MathOverflow)?
        / YIELD_INDEX_PRECISION)
}

/// Borrow units a record holds inside the pool's `scaled_borrows`.
pub fn scaled_debt(record: &BorrowRecord) -> Result<u128> {
    if !record.is_active() {
        return Ok(0);
    }

    scale_debt(record.principal_owed, record.borrow_index_snapshot)
}

/// What a borrower owes once the pool's borrow index reaches `borrow_index`.
pub fn borrower_debt(record: &BorrowRecord, borrow_index: u128) -> Result<u128> {
    debt_at(scaled_debt(record)?, borrow_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_YEAR;
    use crate::state::PoolConfig;

    fn pool_at(now: u64) -> PoolState {
        PoolState::genesis(Pubkey::new_unique(), Pubkey::new_unique(), PoolConfig::default(), now)
    }

    fn with_borrows(mut pool: PoolState, amount: u128) -> PoolState {
        pool.scaled_borrows = scale_debt(amount, pool.borrow_index).unwrap();
        pool.total_borrows = debt_at(pool.scaled_borrows, pool.borrow_index).unwrap();
        pool
    }

    #[test]
    fn test_simple_interest_full_year() {
        // 10% of 1_000_000 over one year
        let interest = simple_interest(1_000_000, 10, SECONDS_PER_YEAR, SECONDS_PER_YEAR).unwrap();
        assert_eq!(interest, 100_000);
    }

    #[test]
    fn test_simple_interest_truncates() {
        // 1000 * 10 * 1 / (100 * 31_556_952) rounds down to zero
        assert_eq!(simple_interest(1_000, 10, 1, SECONDS_PER_YEAR).unwrap(), 0);
    }

    #[test]
    fn test_simple_interest_overflow() {
        let err = simple_interest(u128::MAX, 10, 10, SECONDS_PER_YEAR).unwrap_err();
        assert_eq!(err, PoolError::MathOverflow.into());
    }

    #[test]
    fn test_accrue_is_noop_without_elapsed_time() {
        let mut pool = with_borrows(pool_at(100), 1_000_000);
        let before = pool.clone();

        assert_eq!(accrue_interest(&mut pool, 100).unwrap(), 0);
        assert_eq!(accrue_interest(&mut pool, 50).unwrap(), 0);
        assert_eq!(pool, before);
    }

    #[test]
    fn test_accrue_without_borrows_only_moves_clock() {
        let mut pool = pool_at(0);
        pool.total_deposits = 10_001;

        assert_eq!(accrue_interest(&mut pool, SECONDS_PER_YEAR).unwrap(), 0);
        assert_eq!(pool.cumulative_yield_index, 0);
        assert_eq!(pool.last_accrual_time, SECONDS_PER_YEAR);
    }

    #[test]
    fn test_accrue_grows_index_and_borrows() {
        let mut pool = with_borrows(pool_at(0), 500_000);
        pool.total_deposits = 1_000_000;

        let accrued = accrue_interest(&mut pool, SECONDS_PER_YEAR).unwrap();
        assert_eq!(accrued, 50_000);
        assert_eq!(pool.total_borrows, 550_000);
        assert_eq!(pool.borrow_index, BORROW_INDEX_PRECISION * 11 / 10);
        // 50_000 * 10_000 / 1_000_000
        assert_eq!(pool.cumulative_yield_index, 500);
        assert_eq!(pool.last_accrual_time, SECONDS_PER_YEAR);

        // Same instant again changes nothing
        assert_eq!(accrue_interest(&mut pool, SECONDS_PER_YEAR).unwrap(), 0);
        assert_eq!(pool.cumulative_yield_index, 500);
    }

    #[test]
    fn test_pending_yield() {
        let record = DepositRecord {
            depositor: Pubkey::new_unique(),
            amount: 200_000,
            yield_index_snapshot: 100,
            bump: 0,
        };
        assert_eq!(pending_yield(&record, 100).unwrap(), 0);
        // 200_000 * 400 / 10_000
        assert_eq!(pending_yield(&record, 500).unwrap(), 8_000);
        assert_eq!(pending_yield(&DepositRecord::default(), 500).unwrap(), 0);
    }

    #[test]
    fn test_accrual_compounds_across_steps() {
        let mut pool = with_borrows(pool_at(0), 1_000_000);
        pool.total_deposits = 10_000_001;

        assert_eq!(accrue_interest(&mut pool, SECONDS_PER_YEAR / 2).unwrap(), 50_000);
        // Second half-year charges interest on the first half's interest too
        assert_eq!(accrue_interest(&mut pool, SECONDS_PER_YEAR).unwrap(), 52_500);
        assert_eq!(pool.total_borrows, 1_102_500);
        assert_eq!(pool.total_borrows, debt_at(pool.scaled_borrows, pool.borrow_index).unwrap());
    }

    #[test]
    fn test_borrow_index_frozen_without_loans() {
        let mut pool = pool_at(0);
        assert_eq!(projected_borrow_index(&pool, SECONDS_PER_YEAR).unwrap(), BORROW_INDEX_PRECISION);

        accrue_interest(&mut pool, SECONDS_PER_YEAR).unwrap();
        assert_eq!(pool.borrow_index, BORROW_INDEX_PRECISION);
    }

    #[test]
    fn test_scaled_debt_rounds_against_the_borrower() {
        let index = BORROW_INDEX_PRECISION * 3;
        // 10 lamports at 3.0 is 3.33 units, recorded as 4
        assert_eq!(scale_debt(10, index).unwrap(), 4);
        assert_eq!(debt_at(4, index).unwrap(), 12);
        assert_eq!(debt_at(3, index).unwrap(), 9);
        assert_eq!(scale_debt(10, 0).unwrap_err(), PoolError::MathOverflow.into());
    }

    #[test]
    fn test_borrower_debt() {
        let record = BorrowRecord {
            borrower: Pubkey::new_unique(),
            principal_owed: 1_000_000,
            borrow_index_snapshot: BORROW_INDEX_PRECISION,
            last_accrued_time: 10,
            bump: 0,
        };
        assert_eq!(scaled_debt(&record).unwrap(), 1_000_000);
        assert_eq!(borrower_debt(&record, BORROW_INDEX_PRECISION).unwrap(), 1_000_000);
        assert_eq!(borrower_debt(&record, BORROW_INDEX_PRECISION * 11 / 10).unwrap(), 1_100_000);
        assert_eq!(borrower_debt(&BorrowRecord::default(), BORROW_INDEX_PRECISION).unwrap(), 0);
    }
}
