//! Global summary report
//!
//! The headline dashboard: patrimony, invested total, emergency-fund
//! progress, available capital and overall savings rate, plus the current
//! month's flows.

use crate::models::{Ledger, Money, Month, Period};
use crate::services::Metrics;

/// All-time and current-month headline figures
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Net worth: income minus consumption expenses
    pub patrimony: Money,
    /// Total moved into investment categories
    pub total_invested: Money,
    /// Patrimony not yet invested
    pub available: Money,
    /// Accumulated emergency fund
    pub emergency_total: Money,
    /// Configured emergency-fund target
    pub emergency_goal: Money,
    /// Progress toward the goal, capped at 100
    pub emergency_percent: f64,
    /// Percent of all-time income kept
    pub savings_rate: f64,
    /// Month the flow figures refer to
    pub month: Month,
    pub month_income: Money,
    pub month_expenses: Money,
}

/// Progress toward a goal as a capped percentage
///
/// A non-positive goal reads as 0: "progress" toward nothing is not a
/// number worth showing.
pub fn goal_percent(total: Money, goal: Money) -> f64 {
    if !goal.is_positive() {
        return 0.0;
    }
    (total.as_euros() / goal.as_euros() * 100.0).min(100.0)
}

impl SummaryReport {
    /// Generate the summary, with month flows for the given month
    pub fn generate(ledger: &Ledger, month: Month) -> Self {
        let metrics = Metrics::new(ledger);
        let window = Period::Month(month);
        let emergency_total = metrics.emergency_fund_total();

        Self {
            patrimony: metrics.patrimony(),
            total_invested: metrics.total_invested(),
            available: metrics.available(),
            emergency_total,
            emergency_goal: ledger.emergency_goal,
            emergency_percent: goal_percent(emergency_total, ledger.emergency_goal),
            savings_rate: metrics.savings_rate(),
            month,
            month_income: metrics.income_for(window),
            month_expenses: metrics.real_expenses_for(window),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Resumen financiero\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!("Patrimonio:        {:>15}\n", self.patrimony));
        output.push_str(&format!("Invertido:         {:>15}\n", self.total_invested));
        output.push_str(&format!("Disponible:        {:>15}\n", self.available));
        output.push_str(&format!(
            "Colchón:           {:>15}  ({:.0}% de {})\n",
            self.emergency_total, self.emergency_percent, self.emergency_goal
        ));
        output.push_str(&format!(
            "Tasa de ahorro:    {:>14.1}%\n",
            self.savings_rate
        ));
        output.push('\n');

        output.push_str(&format!("Mes {}\n", self.month));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!("Ingresos:          {:>15}\n", self.month_income));
        output.push_str(&format!("Gastos:            {:>15}\n", self.month_expenses));
        output.push_str(&format!(
            "Balance:           {:>15}\n",
            self.month_income - self.month_expenses
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionKind, EMERGENCY_CATEGORY};

    #[test]
    fn test_summary_figures() {
        let mut ledger = Ledger::default();
        let m: Month = "2024-06".parse().unwrap();
        ledger.add_transaction(
            TransactionKind::Income,
            m,
            Money::from_euros(2000),
            "Salario",
            "Efectivo",
            "",
        );
        ledger.add_transaction(
            TransactionKind::Expense,
            m,
            Money::from_euros(500),
            EMERGENCY_CATEGORY,
            "Efectivo",
            "",
        );
        ledger.add_transaction(
            TransactionKind::Expense,
            m,
            Money::from_euros(400),
            "Comida",
            "Efectivo",
            "",
        );

        let report = SummaryReport::generate(&ledger, m);
        assert_eq!(report.patrimony, Money::from_euros(1600));
        assert_eq!(report.total_invested, Money::from_euros(500));
        assert_eq!(report.available, Money::from_euros(1100));
        // Default goal is 5000: 500 of it is 10%
        assert!((report.emergency_percent - 10.0).abs() < 1e-9);
        assert_eq!(report.month_income, Money::from_euros(2000));
        assert_eq!(report.month_expenses, Money::from_euros(400));

        let text = report.format_terminal();
        assert!(text.contains("Patrimonio"));
        assert!(text.contains("2024-06"));
    }

    #[test]
    fn test_goal_percent_caps_and_zero_goal() {
        assert_eq!(goal_percent(Money::from_euros(9000), Money::from_euros(5000)), 100.0);
        assert_eq!(goal_percent(Money::from_euros(100), Money::zero()), 0.0);
        assert!((goal_percent(Money::from_euros(2500), Money::from_euros(5000)) - 50.0).abs() < 1e-9);
    }
}
