//! The derivation engine
//!
//! Every financial figure the application shows comes from here. All
//! functions are pure reads over the ledger's current transaction list and
//! recompute in full on each call; nothing is cached or stored. O(n) per
//! call is fine at personal-ledger scale.
//!
//! The one invariant worth spelling out: expenses in investment categories
//! are reallocations of patrimony, not consumption. They count into
//! `total_invested` and are excluded from "real" expenses, so they must
//! never be subtracted from patrimony a second time.

use std::collections::BTreeMap;

use crate::models::{Ledger, Money, Period, Transaction, EMERGENCY_CATEGORY};

/// Pure read-only metric queries over a ledger snapshot
pub struct Metrics<'a> {
    ledger: &'a Ledger,
}

impl<'a> Metrics<'a> {
    /// Create a metrics view over a ledger
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    fn transactions(&self) -> impl Iterator<Item = &'a Transaction> {
        self.ledger.transactions.iter()
    }

    /// Whether a category is currently a member of the investment group
    pub fn is_investment_category(&self, category: &str) -> bool {
        self.ledger.category_groups.is_investment(category)
    }

    fn is_real_expense(&self, txn: &Transaction) -> bool {
        txn.is_expense() && !self.is_investment_category(&txn.category)
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Money {
        self.transactions()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all consumption (non-investment) expense amounts
    pub fn real_expenses(&self) -> Money {
        self.transactions()
            .filter(|t| self.is_real_expense(t))
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all expense amounts in investment categories
    pub fn total_invested(&self) -> Money {
        self.transactions()
            .filter(|t| t.is_expense() && self.is_investment_category(&t.category))
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all expense amounts in the emergency-fund category
    pub fn emergency_fund_total(&self) -> Money {
        self.transactions()
            .filter(|t| t.is_expense() && t.category == EMERGENCY_CATEGORY)
            .map(|t| t.amount)
            .sum()
    }

    /// Net worth: income minus real expenses
    ///
    /// Investment expenses are reallocations and never subtract here.
    pub fn patrimony(&self) -> Money {
        self.total_income() - self.real_expenses()
    }

    /// Patrimony not yet allocated to any investment bucket
    ///
    /// May be negative when more has been invested than current patrimony
    /// supports; that is a valid, displayable state.
    pub fn available(&self) -> Money {
        self.patrimony() - self.total_invested()
    }

    /// Invested amount per investment category
    ///
    /// Categories with no matching transactions are absent, never present
    /// with zero.
    pub fn investment_by_category(&self) -> BTreeMap<String, Money> {
        let mut breakdown = BTreeMap::new();
        for txn in self
            .transactions()
            .filter(|t| t.is_expense() && self.is_investment_category(&t.category))
        {
            *breakdown.entry(txn.category.clone()).or_insert(Money::zero()) += txn.amount;
        }
        breakdown
    }

    /// Invested amount per category, restricted to a window
    pub fn investment_by_category_for(&self, period: Period) -> BTreeMap<String, Money> {
        let mut breakdown = BTreeMap::new();
        for txn in self.transactions().filter(|t| {
            t.is_expense() && period.contains(t.month) && self.is_investment_category(&t.category)
        }) {
            *breakdown.entry(txn.category.clone()).or_insert(Money::zero()) += txn.amount;
        }
        breakdown
    }

    /// Share of income kept: `(income - real expenses) / income * 100`
    ///
    /// Defined as exactly 0 when total income is 0. That is a display
    /// policy, not a derived truth: a rate over no income is meaningless
    /// and must never divide by zero.
    pub fn savings_rate(&self) -> f64 {
        let income = self.total_income();
        if !income.is_positive() {
            return 0.0;
        }
        (income - self.real_expenses()).as_euros() / income.as_euros() * 100.0
    }

    /// Income total inside a month or year window
    pub fn income_for(&self, period: Period) -> Money {
        self.transactions()
            .filter(|t| t.is_income() && period.contains(t.month))
            .map(|t| t.amount)
            .sum()
    }

    /// Real (non-investment) expense total inside a month or year window
    pub fn real_expenses_for(&self, period: Period) -> Money {
        self.transactions()
            .filter(|t| self.is_real_expense(t) && period.contains(t.month))
            .map(|t| t.amount)
            .sum()
    }

    /// Real expense total per category inside a window, for breakdowns
    pub fn spending_by_category(&self, period: Period) -> BTreeMap<String, Money> {
        let mut totals = BTreeMap::new();
        for txn in self
            .transactions()
            .filter(|t| self.is_real_expense(t) && period.contains(t.month))
        {
            *totals.entry(txn.category.clone()).or_insert(Money::zero()) += txn.amount;
        }
        totals
    }
}
