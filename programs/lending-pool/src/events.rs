use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub authority: Pubkey,
    pub collateral_mint: Pubkey,
    pub ltv_percentage: u16,
    pub interest_rate_percentage: u16,
    pub liquidation_threshold_percentage: u16,
    pub timestamp: u64,
}

#[event]
pub struct PriceUpdated {
    pub updater: Pubkey,
    pub price: u64,
    pub timestamp: i64,
}

// Deposit events
#[event]
pub struct Deposited {
    pub depositor: Pubkey,
    pub amount: u128,
    pub yield_index: u128,
    pub timestamp: u64,
}

#[event]
pub struct Withdrawn {
    pub depositor: Pubkey,
    pub amount: u128,
    pub yield_paid: u128,
    /// Yield left in the pool as new principal; not a fresh deposit
    pub yield_reinvested: u128,
    pub remaining: u128,
    pub timestamp: u64,
}

// Borrow events
#[event]
pub struct Borrowed {
    pub borrower: Pubkey,
    pub collateral_amount: u128,
    pub amount: u128,
    pub total_debt: u128,
    pub timestamp: u64,
}

#[event]
pub struct Repaid {
    pub borrower: Pubkey,
    pub amount: u128,
    pub collateral_returned: u128,
    pub timestamp: u64,
}

#[event]
pub struct Liquidated {
    pub liquidator: Pubkey,
    pub borrower: Pubkey,
    pub debt_cleared: u128,
    pub collateral_seized: u128,
    pub timestamp: u64,
}
