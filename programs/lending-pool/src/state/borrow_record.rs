use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct BorrowRecord {
    /// Borrower wallet; default while no loan is open
    pub borrower: Pubkey,

    /// Debt as of `last_accrued_time` (lamports)
    pub principal_owed: u128,

    /// Pool borrow index at which `principal_owed` was recorded
    pub borrow_index_snapshot: u128,

    /// When `principal_owed` last had interest folded in
    pub last_accrued_time: u64,

    /// Bump seed for PDA
    pub bump: u8,
}

impl BorrowRecord {
    pub const SEED_PREFIX: &'static [u8] = b"borrow";

    pub fn is_active(&self) -> bool {
        self.borrower != Pubkey::default()
    }

    pub fn clear(&mut self) {
        let bump = self.bump;
        *self = Self { bump, ..Self::default() };
    }
}

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct CollateralRecord {
    pub borrower: Pubkey,

    /// Collateral posted, in token base units
    pub amount: u128,

    pub bump: u8,
}

impl CollateralRecord {
    pub const SEED_PREFIX: &'static [u8] = b"collateral";

    pub fn clear(&mut self) {
        let bump = self.bump;
        *self = Self { bump, ..Self::default() };
    }
}
