//! Transaction model
//!
//! A transaction is a single income or expense event. Its identity is a
//! creation-timestamp integer id; every other field can be edited. The wire
//! names match the original ledger payload (`"type"` for the kind field).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::Month;

/// Account name used when none is given
pub const DEFAULT_ACCOUNT: &str = "Efectivo";

fn default_account() -> String {
    DEFAULT_ACCOUNT.to_string()
}

/// Whether a transaction adds to or draws from the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier: creation timestamp in milliseconds
    pub id: i64,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// The calendar month this transaction is accounted under
    pub month: Month,

    /// Amount in euros; always positive, the kind carries the direction
    pub amount: Money,

    /// Category name; a soft reference into the category taxonomy
    pub category: String,

    /// Free-text account label
    #[serde(default = "default_account")]
    pub account: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: String,

    /// When the transaction was created
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with the default account and no description
    pub fn new(
        id: i64,
        kind: TransactionKind,
        month: Month,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            month,
            amount,
            category: category.into(),
            account: default_account(),
            description: String::new(),
            date: Utc::now(),
        }
    }

    /// Create a transaction with all user-facing fields
    pub fn with_details(
        id: i64,
        kind: TransactionKind,
        month: Month,
        amount: Money,
        category: impl Into<String>,
        account: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(id, kind, month, amount, category);
        txn.account = account.into();
        txn.description = description.into();
        txn
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        };
        write!(f, "{} {} {}{}", self.month, self.category, sign, self.amount)
    }
}

/// The editable subset of a transaction; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct TransactionEdit {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub account: Option<String>,
    pub description: Option<String>,
}

impl TransactionEdit {
    /// Check if the edit changes nothing
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.account.is_none()
            && self.description.is_none()
    }
}
