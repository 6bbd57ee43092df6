//! Patrimony evolution report
//!
//! Month-by-month flows over a trailing 12-month window, with the running
//! patrimony at the end of each month. The running figure includes every
//! transaction up to and including that month, also those before the
//! window, so the first row already reflects older history.

use crate::models::{Ledger, Money, Month, Period};
use crate::services::Metrics;

/// One month's row in the evolution table
#[derive(Debug, Clone)]
pub struct MonthPoint {
    pub month: Month,
    pub income: Money,
    /// Consumption expenses only
    pub expenses: Money,
    /// Patrimony at the end of this month
    pub cumulative: Money,
}

/// Trailing-12-months evolution ending at a given month
#[derive(Debug, Clone)]
pub struct EvolutionReport {
    pub points: Vec<MonthPoint>,
}

impl EvolutionReport {
    /// Generate the evolution table for the 12 months ending at `until`
    pub fn generate(ledger: &Ledger, until: Month) -> Self {
        let metrics = Metrics::new(ledger);
        let window = until.last_12();
        let first = window[0];

        // Patrimony accumulated before the window opens
        let mut cumulative: Money = ledger
            .transactions
            .iter()
            .filter(|t| t.month < first)
            .map(|t| {
                if t.is_income() {
                    t.amount
                } else if metrics.is_investment_category(&t.category) {
                    Money::zero()
                } else {
                    -t.amount
                }
            })
            .sum();

        let points = window
            .into_iter()
            .map(|month| {
                let period = Period::Month(month);
                let income = metrics.income_for(period);
                let expenses = metrics.real_expenses_for(period);
                cumulative += income - expenses;
                MonthPoint {
                    month,
                    income,
                    expenses,
                    cumulative,
                }
            })
            .collect();

        Self { points }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Evolución del patrimonio (últimos 12 meses)\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>16}\n",
            "Mes", "Ingresos", "Gastos", "Patrimonio"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>16}\n",
                point.month.to_string(),
                point.income.to_string(),
                point.expenses.to_string(),
                point.cumulative.to_string()
            ));
        }

        output
    }
}
