//! Pool accounting over plain account data.
//!
//! Every operation accrues interest first, then validates, then commits.
//! Changes are staged on a copy of `PoolState`, so an operation that fails
//! leaves the pool and the caller's records untouched.

pub mod borrows;
pub mod deposits;
pub mod liquidation;

pub use borrows::*;
pub use deposits::*;
pub use liquidation::*;

/// Amounts released when a borrow position is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Debt cleared, interest included (lamports)
    pub debt: u128,
    /// Collateral released from the vault
    pub collateral: u128,
    /// Whether a loan was open; without one the records were created by
    /// the caller of this instruction
    pub had_position: bool,
}
