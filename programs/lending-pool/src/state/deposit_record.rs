use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct DepositRecord {
    /// Depositor wallet; default while the record is empty
    pub depositor: Pubkey,

    /// Principal in lamports
    pub amount: u128,

    /// Pool yield index when the principal was last (re)based
    pub yield_index_snapshot: u128,

    /// Bump seed for PDA
    pub bump: u8,
}

impl DepositRecord {
    pub const SEED_PREFIX: &'static [u8] = b"deposit";

    pub fn is_live(&self) -> bool {
        self.depositor != Pubkey::default()
    }

    pub fn open(&mut self, depositor: Pubkey, amount: u128, yield_index: u128) {
        self.depositor = depositor;
        self.amount = amount;
        self.yield_index_snapshot = yield_index;
    }

    pub fn rebase(&mut self, amount: u128, yield_index: u128) {
        self.amount = amount;
        self.yield_index_snapshot = yield_index;
    }

    pub fn clear(&mut self) {
        let bump = self.bump;
        *self = Self { bump, ..Self::default() };
    }
}
