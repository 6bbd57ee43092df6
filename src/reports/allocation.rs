//! Monthly allocation report
//!
//! Renders the group-by-group comparison between configured percentage
//! targets and the month's actual flows.

use crate::models::{Ledger, Money, Month, Period};
use crate::services::{allocation_breakdown, AllocationStatus, GroupAllocation, Metrics};

/// Allocation comparison for one month
#[derive(Debug, Clone)]
pub struct AllocationReport {
    pub month: Month,
    /// Income the targets were derived from
    pub income: Money,
    pub rows: Vec<GroupAllocation>,
}

impl AllocationReport {
    /// Generate the allocation comparison for a month
    pub fn generate(ledger: &Ledger, month: Month) -> Self {
        let income = Metrics::new(ledger).income_for(Period::Month(month));
        Self {
            month,
            income,
            rows: allocation_breakdown(ledger, month),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Distribución del presupuesto — {}\n", self.month));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!("Ingresos del mes: {}\n\n", self.income));

        output.push_str(&format!(
            "{:<20} {:>5} {:>12} {:>12} {:>18}\n",
            "Grupo", "%", "Objetivo", "Real", "Desviación"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let deviation = match row.status {
                AllocationStatus::Over => format!("+{} ", row.magnitude),
                AllocationStatus::Under => format!("-{} ", row.magnitude),
            };
            let mark = if row.is_warning() { "!" } else { " " };
            output.push_str(&format!(
                "{:<20} {:>4}% {:>12} {:>12} {:>17}{}\n",
                row.name,
                row.percent,
                row.target.to_string(),
                row.actual.to_string(),
                deviation,
                mark
            ));
        }

        output
    }
}
