//! The ledger: the unit of persistence and sole source of truth
//!
//! Holds the transaction sequence, the category taxonomy and the two scalar
//! settings. All metrics are derived from it on demand, never stored. The
//! wire format is the original camelCase payload; missing fields are
//! backfilled with defaults on load rather than rejected, so old payloads
//! keep importing as the schema grows.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::{default_investment_group, CategoryGroups, INVESTMENT_GROUP_KEY};
use super::money::Money;
use super::month::Month;
use super::transaction::{Transaction, TransactionEdit, TransactionKind};
use crate::error::{FinanzasError, FinanzasResult};

fn default_emergency_goal() -> Money {
    Money::from_euros(5000)
}

/// The complete persisted state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// First-run gate; set once the emergency goal has been chosen
    #[serde(default)]
    pub setup_complete: bool,

    /// Target size of the emergency fund
    #[serde(default = "default_emergency_goal")]
    pub emergency_goal: Money,

    /// The category taxonomy
    #[serde(default)]
    pub category_groups: CategoryGroups,

    /// Ordered sequence of all transactions
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            setup_complete: false,
            emergency_goal: default_emergency_goal(),
            category_groups: CategoryGroups::default(),
            transactions: Vec::new(),
        }
    }
}

impl Ledger {
    /// Backfill defaults a deserialized payload may lack
    ///
    /// Serde defaults cover wholly missing fields; this covers the one
    /// nested case: a `categoryGroups` object that predates the Inversión
    /// group. Called on every load and import, never rejects.
    pub fn apply_defaults(&mut self) {
        if !self.category_groups.contains_group(INVESTMENT_GROUP_KEY) {
            self.category_groups
                .insert(INVESTMENT_GROUP_KEY, default_investment_group());
        }
    }

    // --- transactions ---

    /// Next unique transaction id: creation time in milliseconds, bumped
    /// past the current maximum so rapid adds stay unique.
    fn next_transaction_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max = self.transactions.iter().map(|t| t.id).max().unwrap_or(0);
        now.max(max + 1)
    }

    /// Append a new transaction, assigning a fresh id; returns the id
    ///
    /// The store does not validate amounts; callers reject non-positive
    /// amounts before getting here.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        month: Month,
        amount: Money,
        category: impl Into<String>,
        account: impl Into<String>,
        description: impl Into<String>,
    ) -> i64 {
        let id = self.next_transaction_id();
        self.transactions.push(Transaction::with_details(
            id,
            kind,
            month,
            amount,
            category,
            account,
            description,
        ));
        id
    }

    /// Edit a transaction in place; absent ids are a silent no-op
    ///
    /// Returns whether a transaction was found.
    pub fn edit_transaction(&mut self, id: i64, edit: TransactionEdit) -> bool {
        let Some(txn) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return false;
        };

        if let Some(amount) = edit.amount {
            txn.amount = amount;
        }
        if let Some(category) = edit.category {
            txn.category = category;
        }
        if let Some(account) = edit.account {
            txn.account = account;
        }
        if let Some(description) = edit.description {
            txn.description = description;
        }
        true
    }

    /// Remove a transaction by id; absent ids are a silent no-op
    ///
    /// Returns whether a transaction was removed.
    pub fn remove_transaction(&mut self, id: i64) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    // --- category taxonomy ---

    /// Add a category to a group
    ///
    /// Fails when the name already exists anywhere in the taxonomy or the
    /// group key is unknown. Does not touch the percent invariant: adding a
    /// category never forces a rebalance.
    pub fn add_category(&mut self, group_key: &str, name: &str) -> FinanzasResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinanzasError::Validation("Category name is required".into()));
        }
        if self.category_groups.contains_category(name) {
            return Err(FinanzasError::duplicate_category(name));
        }

        let group = self
            .category_groups
            .get_mut(group_key)
            .ok_or_else(|| FinanzasError::group_not_found(group_key))?;

        group.categories.push(name.to_string());
        Ok(())
    }

    /// Remove a category from a group by position; returns the removed name
    ///
    /// Transactions referencing the name keep it and become orphaned: they
    /// still display, but drop out of group-based aggregation.
    pub fn remove_category(&mut self, group_key: &str, index: usize) -> FinanzasResult<String> {
        let group = self
            .category_groups
            .get_mut(group_key)
            .ok_or_else(|| FinanzasError::group_not_found(group_key))?;

        if index >= group.categories.len() {
            return Err(FinanzasError::Validation(format!(
                "No category at position {} in group '{}'",
                index, group_key
            )));
        }
        Ok(group.categories.remove(index))
    }

    /// Set the target percent of every group at once
    ///
    /// This is the one path that enforces the 100% invariant: keys must name
    /// existing groups, groups missing from the map count as 0, and nothing
    /// is mutated unless the new percents sum to exactly 100.
    pub fn set_percents(&mut self, percents: &BTreeMap<String, u8>) -> FinanzasResult<()> {
        for key in percents.keys() {
            if !self.category_groups.contains_group(key) {
                return Err(FinanzasError::group_not_found(key.clone()));
            }
        }

        let total: u32 = self
            .category_groups
            .keys()
            .map(|key| percents.get(key).copied().unwrap_or(0) as u32)
            .sum();

        if total != 100 {
            return Err(FinanzasError::Validation(format!(
                "Group percents sum to {}%, they must sum to 100%",
                total
            )));
        }

        let keys: Vec<String> = self.category_groups.keys().cloned().collect();
        for key in keys {
            let percent = percents.get(&key).copied().unwrap_or(0);
            if let Some(group) = self.category_groups.get_mut(&key) {
                group.percent = percent;
            }
        }
        Ok(())
    }

    // --- settings ---

    /// Set the emergency-fund goal
    pub fn set_emergency_goal(&mut self, goal: Money) {
        self.emergency_goal = goal;
    }

    /// Record first-run setup: goal chosen, gate opened
    pub fn complete_setup(&mut self, goal: Money) {
        self.emergency_goal = goal;
        self.setup_complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::EMERGENCY_CATEGORY;

    fn june() -> Month {
        "2024-06".parse().unwrap()
    }

    fn ledger_with_one_expense() -> (Ledger, i64) {
        let mut ledger = Ledger::default();
        let id = ledger.add_transaction(
            TransactionKind::Expense,
            june(),
            Money::from_euros(50),
            "Comida",
            "Efectivo",
            "",
        );
        (ledger, id)
    }

    #[test]
    fn test_add_assigns_unique_increasing_ids() {
        let mut ledger = Ledger::default();
        let a = ledger.add_transaction(
            TransactionKind::Income,
            june(),
            Money::from_euros(1),
            "Salario",
            "Banco",
            "",
        );
        let b = ledger.add_transaction(
            TransactionKind::Income,
            june(),
            Money::from_euros(2),
            "Salario",
            "Banco",
            "",
        );
        assert!(b > a);
        assert_eq!(ledger.transactions.len(), 2);
    }

    #[test]
    fn test_edit_transaction() {
        let (mut ledger, id) = ledger_with_one_expense();

        let found = ledger.edit_transaction(
            id,
            TransactionEdit {
                amount: Some(Money::from_euros(75)),
                category: Some("Hobby".into()),
                ..Default::default()
            },
        );
        assert!(found);

        let txn = ledger.transaction(id).unwrap();
        assert_eq!(txn.amount, Money::from_euros(75));
        assert_eq!(txn.category, "Hobby");
        assert_eq!(txn.account, "Efectivo"); // untouched
    }

    #[test]
    fn test_edit_absent_id_is_silent_noop() {
        let (mut ledger, _) = ledger_with_one_expense();
        let snapshot = ledger.transactions.clone();

        let found = ledger.edit_transaction(
            999,
            TransactionEdit {
                amount: Some(Money::from_euros(1)),
                ..Default::default()
            },
        );
        assert!(!found);
        assert_eq!(ledger.transactions.len(), snapshot.len());
        assert_eq!(ledger.transactions[0].amount, snapshot[0].amount);
    }

    #[test]
    fn test_remove_transaction() {
        let (mut ledger, id) = ledger_with_one_expense();
        assert!(ledger.remove_transaction(id));
        assert!(ledger.transactions.is_empty());
        // Absent id: silent no-op
        assert!(!ledger.remove_transaction(id));
    }

    #[test]
    fn test_add_category() {
        let mut ledger = Ledger::default();
        ledger.add_category("ocio", "Viajes").unwrap();
        assert!(ledger.category_groups.contains_category("Viajes"));
    }

    #[test]
    fn test_add_duplicate_category_rejected_across_groups() {
        let mut ledger = Ledger::default();
        // "Salud" lives in basicos; adding it to ocio must fail
        let err = ledger.add_category("ocio", "Salud").unwrap_err();
        assert!(matches!(err, FinanzasError::Duplicate { .. }));

        let err = ledger.add_category("nope", "Viajes").unwrap_err();
        assert!(err.is_not_found());

        let err = ledger.add_category("ocio", "   ").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_remove_category_orphans_transactions() {
        let (mut ledger, id) = ledger_with_one_expense();
        // "Comida" is position 0 in ocio
        let removed = ledger.remove_category("ocio", 0).unwrap();
        assert_eq!(removed, "Comida");

        // The transaction keeps its category string
        assert_eq!(ledger.transaction(id).unwrap().category, "Comida");
        assert!(ledger.category_groups.owning_group("Comida").is_none());
    }

    #[test]
    fn test_remove_category_bad_index() {
        let mut ledger = Ledger::default();
        assert!(ledger.remove_category("ocio", 99).is_err());
    }

    #[test]
    fn test_set_percents_enforces_sum() {
        let mut ledger = Ledger::default();
        let mut percents = BTreeMap::new();
        percents.insert("basicos".to_string(), 50u8);
        percents.insert("ocio".to_string(), 20u8);
        percents.insert(INVESTMENT_GROUP_KEY.to_string(), 20u8);

        // 90% total: rejected, nothing mutated
        let err = ledger.set_percents(&percents).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ledger.category_groups.get("basicos").unwrap().percent, 20);

        percents.insert(INVESTMENT_GROUP_KEY.to_string(), 30u8);
        ledger.set_percents(&percents).unwrap();
        assert_eq!(ledger.category_groups.get("basicos").unwrap().percent, 50);
        assert_eq!(ledger.category_groups.percent_total(), 100);
    }

    #[test]
    fn test_set_percents_rejects_unknown_group() {
        let mut ledger = Ledger::default();
        let mut percents = BTreeMap::new();
        percents.insert("basicos".to_string(), 40u8);
        percents.insert("ocio".to_string(), 10u8);
        percents.insert(INVESTMENT_GROUP_KEY.to_string(), 30u8);
        // Sums to 100 with the typo counted, but the key names no group
        percents.insert("typo".to_string(), 20u8);

        let err = ledger.set_percents(&percents).unwrap_err();
        assert!(err.is_not_found());
        // Nothing mutated
        assert_eq!(ledger.category_groups.get("basicos").unwrap().percent, 20);
    }

    #[test]
    fn test_add_category_keeps_relaxed_percent_invariant() {
        let mut ledger = Ledger::default();
        // Adding a category never forces a rebalance even if percents are off
        ledger.category_groups.get_mut("ocio").unwrap().percent = 99;
        ledger.add_category("ocio", "Viajes").unwrap();
        assert_ne!(ledger.category_groups.percent_total(), 100);
    }

    #[test]
    fn test_defaults_merge_on_sparse_payload() {
        // Payload missing everything except one field
        let mut ledger: Ledger = serde_json::from_str(r#"{"setupComplete": true}"#).unwrap();
        ledger.apply_defaults();

        assert!(ledger.setup_complete);
        assert_eq!(ledger.emergency_goal, Money::from_euros(5000));
        assert!(ledger.transactions.is_empty());
        assert!(ledger.category_groups.contains_category(EMERGENCY_CATEGORY));
    }

    #[test]
    fn test_defaults_merge_backfills_missing_inversion_group() {
        // categoryGroups present but predating the investment group
        let json = r#"{
            "categoryGroups": {
                "basicos": { "name": "Gastos Básicos", "percent": 40, "categories": ["Salud"] }
            }
        }"#;
        let mut ledger: Ledger = serde_json::from_str(json).unwrap();
        ledger.apply_defaults();

        // The custom basicos group survives, inversion is backfilled
        assert_eq!(ledger.category_groups.get("basicos").unwrap().percent, 40);
        let inv = ledger.category_groups.get(INVESTMENT_GROUP_KEY).unwrap();
        assert_eq!(inv.name, "Inversión");
        assert!(ledger.category_groups.is_investment(EMERGENCY_CATEGORY));
    }

    #[test]
    fn test_wire_round_trip() {
        let (ledger, _) = ledger_with_one_expense();
        let json = serde_json::to_value(&ledger).unwrap();
        assert!(json.get("setupComplete").is_some());
        assert!(json.get("emergencyGoal").is_some());
        assert!(json.get("categoryGroups").is_some());
        assert!(json.get("transactions").is_some());

        let back: Ledger = serde_json::from_value(json).unwrap();
        assert_eq!(back.transactions.len(), 1);
        assert_eq!(back.transactions[0].category, "Comida");
    }
}
