//! Terminal reports
//!
//! Each report derives its figures from the ledger and renders a plain
//! fixed-width text table. Generation and formatting are split so tests
//! can assert on the figures directly.

pub mod allocation;
pub mod evolution;
pub mod investments;
pub mod spending;
pub mod summary;

pub use allocation::AllocationReport;
pub use evolution::{EvolutionReport, MonthPoint};
pub use investments::{InvestmentRow, InvestmentsReport};
pub use spending::{SpendingReport, SpendingRow};
pub use summary::SummaryReport;
