use anchor_lang::prelude::*;
use crate::constants::{BORROW_INDEX_PRECISION, INITIAL_TOTAL_DEPOSITS};
use crate::errors::PoolError;
use crate::state::PoolConfig;
use crate::utils::debt_at;

/// Aggregate counters of the pool. One per deployment.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct PoolState {
    /// Pool creator, allowed to set up the price feed
    pub authority: Pubkey,

    /// The only collateral mint accepted by `borrow`
    pub collateral_mint: Pubkey,

    pub config: PoolConfig,

    /// Collateral held in the collateral vault (token base units)
    pub total_collateral: u128,

    /// Depositor principal plus the initial floor of 1
    pub total_deposits: u128,

    /// Outstanding debt, interest included (lamports).
    /// Always `scaled_borrows` valued at `borrow_index`.
    pub total_borrows: u128,

    /// Sum of every open loan in borrow-index units
    pub scaled_borrows: u128,

    /// Growth of one unit of debt since genesis, scaled by `BORROW_INDEX_PRECISION`
    pub borrow_index: u128,

    /// Last time interest was accrued (unix timestamp)
    pub last_accrual_time: u64,

    /// Accrued interest per unit of deposit, in basis points
    pub cumulative_yield_index: u128,

    pub bump: u8,
    pub principal_vault_bump: u8,
    pub collateral_vault_bump: u8,
}

impl PoolState {
    pub const SEED_PREFIX: &'static [u8] = b"pool_state";
    pub const PRINCIPAL_VAULT_SEED: &'static [u8] = b"principal_vault";
    pub const COLLATERAL_VAULT_SEED: &'static [u8] = b"collateral_vault";

    /// A fresh pool. Bumps are filled in by `initialize_pool`.
    pub fn genesis(authority: Pubkey, collateral_mint: Pubkey, config: PoolConfig, now: u64) -> Self {
        Self {
            authority,
            collateral_mint,
            config,
            total_collateral: 0,
            total_deposits: INITIAL_TOTAL_DEPOSITS,
            total_borrows: 0,
            scaled_borrows: 0,
            borrow_index: BORROW_INDEX_PRECISION,
            last_accrual_time: now,
            cumulative_yield_index: 0,
            bump: 0,
            principal_vault_bump: 0,
            collateral_vault_bump: 0,
        }
    }

    /// Principal actually supplied by depositors.
    pub fn depositor_principal(&self) -> u128 {
        self.total_deposits - INITIAL_TOTAL_DEPOSITS
    }

    pub fn add_deposits(&mut self, amount: u128) -> Result<()> {
        self.total_deposits = self.total_deposits
            .checked_add(amount)
            .ok_or(PoolError::MathOverflow)?;
        Ok(())
    }

    pub fn remove_deposits(&mut self, amount: u128) -> Result<()> {
        self.total_deposits = self.total_deposits
            .checked_sub(amount)
            .ok_or(PoolError::DepositFloorBreached)?;
        require_gte!(
            self.total_deposits,
            INITIAL_TOTAL_DEPOSITS,
            PoolError::DepositFloorBreached
        );
        Ok(())
    }

    /// Swap a borrower's scaled debt for its new value and take in freshly
    /// posted collateral.
    pub fn open_borrow(&mut self, old_scaled: u128, new_scaled: u128, collateral: u128) -> Result<()> {
        self.scaled_borrows = self.scaled_borrows
            .checked_sub(old_scaled)
            .and_then(|v| v.checked_add(new_scaled))
            .ok_or(PoolError::MathOverflow)?;
        self.total_borrows = debt_at(self.scaled_borrows, self.borrow_index)?;
        self.total_collateral = self.total_collateral
            .checked_add(collateral)
            .ok_or(PoolError::MathOverflow)?;
        Ok(())
    }

    /// Remove a cleared position from the aggregates.
    pub fn close_borrow(&mut self, scaled: u128, collateral: u128) -> Result<()> {
        self.scaled_borrows = self.scaled_borrows
            .checked_sub(scaled)
            .ok_or(PoolError::MathOverflow)?;
        self.total_borrows = debt_at(self.scaled_borrows, self.borrow_index)?;
        self.total_collateral = self.total_collateral
            .checked_sub(collateral)
            .ok_or(PoolError::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> PoolState {
        PoolState::genesis(Pubkey::new_unique(), Pubkey::new_unique(), PoolConfig::default(), 1_000)
    }

    #[test]
    fn test_genesis_counters() {
        let pool = pool();
        assert_eq!(pool.total_collateral, 0);
        assert_eq!(pool.total_deposits, 1);
        assert_eq!(pool.total_borrows, 0);
        assert_eq!(pool.scaled_borrows, 0);
        assert_eq!(pool.borrow_index, BORROW_INDEX_PRECISION);
        assert_eq!(pool.cumulative_yield_index, 0);
        assert_eq!(pool.last_accrual_time, 1_000);
        assert_eq!(pool.depositor_principal(), 0);
    }

    #[test]
    fn test_deposit_floor_is_enforced() {
        let mut pool = pool();
        pool.add_deposits(500).unwrap();
        assert_eq!(pool.depositor_principal(), 500);
        pool.remove_deposits(500).unwrap();
        assert_eq!(pool.total_deposits, 1);

        let err = pool.remove_deposits(1).unwrap_err();
        assert_eq!(err, PoolError::DepositFloorBreached.into());
    }

    #[test]
    fn test_total_borrows_follows_borrow_index() {
        let mut pool = pool();
        pool.borrow_index = BORROW_INDEX_PRECISION * 3 / 2;
        pool.open_borrow(0, 100, 50).unwrap();
        assert_eq!(pool.scaled_borrows, 100);
        assert_eq!(pool.total_borrows, 150);

        // Re-borrow replaces the old scaled debt instead of stacking it
        pool.open_borrow(100, 120, 10).unwrap();
        assert_eq!(pool.total_borrows, 180);
        assert_eq!(pool.total_collateral, 60);

        pool.close_borrow(120, 60).unwrap();
        assert_eq!(pool.scaled_borrows, 0);
        assert_eq!(pool.total_borrows, 0);
        assert_eq!(pool.total_collateral, 0);
    }

    #[test]
    fn test_close_borrow_rejects_unknown_debt() {
        let mut pool = pool();
        pool.open_borrow(0, 100, 50).unwrap();
        let before = pool.clone();

        assert_eq!(pool.close_borrow(101, 50).unwrap_err(), PoolError::MathOverflow.into());
        pool = before;
        assert_eq!(pool.close_borrow(100, 51).unwrap_err(), PoolError::MathOverflow.into());
    }

    #[test]
    fn test_vault_addresses_derive_from_pool() {
        let (pool_key, _) = Pubkey::find_program_address(&[PoolState::SEED_PREFIX], &crate::ID);
        let (principal, _) = Pubkey::find_program_address(
            &[PoolState::PRINCIPAL_VAULT_SEED, pool_key.as_ref()],
            &crate::ID,
        );
        let (collateral, _) = Pubkey::find_program_address(
            &[PoolState::COLLATERAL_VAULT_SEED, pool_key.as_ref()],
            &crate::ID,
        );

        assert_ne!(principal, collateral);
        assert_eq!(crate::ID.to_string(), "9mRvT2At1fAcKUWoV5Bo9jToiiJJgjSrkPT7jVwTLekS");
    }
}
