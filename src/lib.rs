//! finanzas-cli - Personal finance tracker for the terminal
//!
//! This library implements a single-ledger personal finance tracker: income
//! and expense events are recorded into one JSON-persisted ledger, and every
//! visible figure (patrimony, invested total, emergency-fund progress,
//! savings rate, per-category and per-period breakdowns) is derived from it
//! on demand. Nothing derived is ever stored.
//!
//! # Architecture
//!
//! - `config`: path resolution for the data directory
//! - `error`: custom error types
//! - `models`: core data types (money, months, transactions, the ledger)
//! - `storage`: JSON blob persistence with atomic writes
//! - `services`: pure derivation engine, allocation comparator, calculators
//! - `reports`: terminal report generation
//! - `export`: ledger backup export and destructive import
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finanzas_cli::config::paths::FinanzasPaths;
//! use finanzas_cli::storage::LedgerStore;
//!
//! let paths = FinanzasPaths::new()?;
//! let store = LedgerStore::open(paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::FinanzasError;
