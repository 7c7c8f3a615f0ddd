pub mod initialize_price_feed;
pub mod update_price;

pub use initialize_price_feed::*;
pub use update_price::*;
