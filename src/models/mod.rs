//! Core data models
//!
//! These are the types the whole crate is built around: money amounts,
//! calendar months, transactions, the category taxonomy and the ledger
//! itself.

pub mod category;
pub mod ledger;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::{CategoryGroup, CategoryGroups, EMERGENCY_CATEGORY, INVESTMENT_GROUP_KEY};
pub use ledger::Ledger;
pub use money::Money;
pub use month::{Month, Period};
pub use transaction::{Transaction, TransactionEdit, TransactionKind, DEFAULT_ACCOUNT};
