pub mod config;
pub mod pool_state;
pub mod deposit_record;
pub mod borrow_record;
pub mod price_feed;

pub use config::*;
pub use pool_state::*;
pub use deposit_record::*;
pub use borrow_record::*;
pub use price_feed::*;
