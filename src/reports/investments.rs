//! Investment portfolio report
//!
//! All-time invested amounts per investment category, emergency-fund
//! progress against the configured goal, and the capital still available
//! to allocate.

use crate::models::{Ledger, Money, EMERGENCY_CATEGORY};
use crate::reports::summary::goal_percent;
use crate::services::Metrics;

/// Invested total for one investment category
#[derive(Debug, Clone)]
pub struct InvestmentRow {
    pub category: String,
    pub amount: Money,
    /// Share of the invested total
    pub percent: f64,
}

/// Portfolio snapshot derived from the full transaction history
#[derive(Debug, Clone)]
pub struct InvestmentsReport {
    /// Non-zero investment categories, emergency fund included
    pub rows: Vec<InvestmentRow>,
    pub total_invested: Money,
    pub emergency_total: Money,
    pub emergency_goal: Money,
    /// Progress toward the goal, capped at 100
    pub emergency_percent: f64,
    pub available: Money,
    pub patrimony: Money,
}

impl InvestmentsReport {
    /// Generate the portfolio snapshot
    pub fn generate(ledger: &Ledger) -> Self {
        let metrics = Metrics::new(ledger);
        let emergency_total = metrics.emergency_fund_total();
        let total_invested = metrics.total_invested();

        let rows = metrics
            .investment_by_category()
            .into_iter()
            .map(|(category, amount)| {
                let percent = if total_invested.is_positive() {
                    amount.as_euros() / total_invested.as_euros() * 100.0
                } else {
                    0.0
                };
                InvestmentRow {
                    category,
                    amount,
                    percent,
                }
            })
            .collect();

        Self {
            rows,
            total_invested,
            emergency_total,
            emergency_goal: ledger.emergency_goal,
            emergency_percent: goal_percent(emergency_total, ledger.emergency_goal),
            available: metrics.available(),
            patrimony: metrics.patrimony(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Inversiones\n");
        output.push_str(&"=".repeat(44));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("Sin inversiones registradas.\n");
        } else {
            for row in &self.rows {
                output.push_str(&format!(
                    "{:<20} {:>14} {:>7.1}%\n",
                    row.category,
                    row.amount.to_string(),
                    row.percent
                ));
            }
            output.push_str(&"-".repeat(44));
            output.push('\n');
            output.push_str(&format!(
                "{:<20} {:>14}\n",
                "Total invertido",
                self.total_invested.to_string()
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "{}: {} de {} ({:.0}%)\n",
            EMERGENCY_CATEGORY, self.emergency_total, self.emergency_goal, self.emergency_percent
        ));
        output.push_str(&format!("Patrimonio:               {}\n", self.patrimony));
        output.push_str(&format!("Disponible para invertir: {}\n", self.available));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Month, TransactionKind};

    #[test]
    fn test_portfolio_snapshot() {
        let mut ledger = Ledger::default();
        let m: Month = "2024-06".parse().unwrap();
        ledger.add_transaction(
            TransactionKind::Income,
            m,
            Money::from_euros(3000),
            "Salario",
            "Efectivo",
            "",
        );
        ledger.add_transaction(
            TransactionKind::Expense,
            m,
            Money::from_euros(1000),
            EMERGENCY_CATEGORY,
            "Efectivo",
            "",
        );
        ledger.add_transaction(
            TransactionKind::Expense,
            m,
            Money::from_euros(400),
            "ETFs",
            "Efectivo",
            "",
        );

        let report = InvestmentsReport::generate(&ledger);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.total_invested, Money::from_euros(1400));
        assert_eq!(report.emergency_total, Money::from_euros(1000));
        assert!((report.emergency_percent - 20.0).abs() < 1e-9);
        assert_eq!(report.available, Money::from_euros(1600));
        assert_eq!(report.patrimony, Money::from_euros(3000));
        let etfs = report.rows.iter().find(|r| r.category == "ETFs").unwrap();
        assert!((etfs.percent - 400.0 / 1400.0 * 100.0).abs() < 1e-9);

        let text = report.format_terminal();
        assert!(text.contains("ETFs"));
        assert!(text.contains("Total invertido"));
    }

    #[test]
    fn test_empty_portfolio() {
        let report = InvestmentsReport::generate(&Ledger::default());
        assert!(report.rows.is_empty());
        assert_eq!(report.emergency_percent, 0.0);
        assert!(report.format_terminal().contains("Sin inversiones"));
    }
}
