//! Derived figures and pure financial computation over the ledger

pub mod allocation;
pub mod calc;
pub mod metrics;

pub use allocation::{allocation_breakdown, AllocationStatus, GroupAllocation};
pub use metrics::Metrics;
