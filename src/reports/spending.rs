//! Spending breakdown report
//!
//! Consumption expenses by category over a month or year window, largest
//! first, with each category's share of the window total.

use crate::models::{Ledger, Money, Period};
use crate::services::Metrics;

/// Spending total for a single category
#[derive(Debug, Clone)]
pub struct SpendingRow {
    pub category: String,
    pub amount: Money,
    /// Share of the window's total spending
    pub percent: f64,
}

/// Spending by category for a window
#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub period: Period,
    pub rows: Vec<SpendingRow>,
    pub total: Money,
}

impl SpendingReport {
    /// Generate the spending breakdown for a window
    pub fn generate(ledger: &Ledger, period: Period) -> Self {
        let metrics = Metrics::new(ledger);
        let by_category = metrics.spending_by_category(period);
        let total: Money = by_category.values().copied().sum();

        let mut rows: Vec<SpendingRow> = by_category
            .into_iter()
            .map(|(category, amount)| {
                let percent = if total.is_positive() {
                    amount.as_euros() / total.as_euros() * 100.0
                } else {
                    0.0
                };
                SpendingRow {
                    category,
                    amount,
                    percent,
                }
            })
            .collect();
        rows.sort_by(|a, b| b.amount.cmp(&a.amount).then(a.category.cmp(&b.category)));

        Self {
            period,
            rows,
            total,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        let window = match self.period {
            Period::Month(m) => format!("mes {m}"),
            Period::Year(y) => format!("año {y}"),
        };
        output.push_str(&format!("Gastos por categoría — {window}\n"));
        output.push_str(&"=".repeat(56));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("Sin gastos en este periodo.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>14} {:>8}\n",
            "Categoría", "Importe", "%"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>14} {:>7.1}%\n",
                row.category,
                row.amount.to_string(),
                row.percent
            ));
        }

        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>14}\n", "Total", self.total.to_string()));

        output
    }
}
