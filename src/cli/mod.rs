//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger store and the derivation
//! layer. Handlers that mutate the ledger save before reporting success.

pub mod calc;
pub mod category;
pub mod data;
pub mod report;
pub mod transaction;

pub use calc::{handle_calc_command, CalcCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_data_command, DataCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
