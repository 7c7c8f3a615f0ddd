pub mod initialize_pool;
pub mod oracle;
pub mod deposit;
pub mod withdraw;
pub mod borrow;
pub mod repay;
pub mod liquidate;
pub mod queries;

pub use initialize_pool::*;
pub use oracle::*;
pub use deposit::*;
pub use withdraw::*;
pub use borrow::*;
pub use repay::*;
pub use liquidate::*;
pub use queries::*;
