pub mod records;
pub mod health;
pub mod interest;
pub mod oracle;
pub mod transfer;

pub use records::*;
pub use health::*;
pub use interest::*;
pub use oracle::*;
pub use transfer::*;
