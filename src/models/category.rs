//! Category taxonomy
//!
//! Spending categories are partitioned into named groups, each with a target
//! allocation percentage. Category names are unique across all groups
//! combined. Transactions reference categories by name only; removing a
//! category orphans its transactions instead of cascading into them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key of the investment group; its expenses are reallocations, not
/// consumption, and are excluded from real expenses everywhere.
pub const INVESTMENT_GROUP_KEY: &str = "inversion";

/// The distinguished emergency-fund category inside the investment group
pub const EMERGENCY_CATEGORY: &str = "Colchón";

/// A group of spending categories with a target share of monthly income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Display name, e.g. "Gastos Básicos"
    pub name: String,

    /// Target allocation as a percentage of period income (0-100)
    pub percent: u8,

    /// Ordered set of category names
    pub categories: Vec<String>,
}

impl CategoryGroup {
    /// Create a group from a display name, percent and category list
    pub fn new(name: impl Into<String>, percent: u8, categories: &[&str]) -> Self {
        Self {
            name: name.into(),
            percent,
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.name, self.percent)
    }
}

/// The full taxonomy: group key → group, deterministic iteration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryGroups(BTreeMap<String, CategoryGroup>);

/// The default Inversión group, also used to backfill payloads that predate it
pub fn default_investment_group() -> CategoryGroup {
    CategoryGroup::new("Inversión", 65, &["Colchón", "ETFs", "Acciones", "Fondos"])
}

impl Default for CategoryGroups {
    fn default() -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(
            "basicos".to_string(),
            CategoryGroup::new("Gastos Básicos", 20, &["Salud", "Transporte"]),
        );
        groups.insert(
            "ocio".to_string(),
            CategoryGroup::new(
                "Ocio",
                15,
                &["Comida", "Hobby", "Suscripciones", "Ocio", "Otros"],
            ),
        );
        groups.insert(INVESTMENT_GROUP_KEY.to_string(), default_investment_group());
        Self(groups)
    }
}

impl CategoryGroups {
    /// Create an empty taxonomy (deserialized payloads fill it in)
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Look up a group by key
    pub fn get(&self, key: &str) -> Option<&CategoryGroup> {
        self.0.get(key)
    }

    /// Look up a group by key, mutably
    pub fn get_mut(&mut self, key: &str) -> Option<&mut CategoryGroup> {
        self.0.get_mut(key)
    }

    /// Insert or replace a group
    pub fn insert(&mut self, key: impl Into<String>, group: CategoryGroup) {
        self.0.insert(key.into(), group);
    }

    /// Whether a group with this key exists
    pub fn contains_group(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over (key, group) pairs in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CategoryGroup)> {
        self.0.iter()
    }

    /// Group keys in deterministic order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the taxonomy has no groups
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All category names across every group, in group iteration order
    pub fn all_categories(&self) -> Vec<&str> {
        self.0
            .values()
            .flat_map(|g| g.categories.iter().map(String::as_str))
            .collect()
    }

    /// Whether a category name exists anywhere in the taxonomy
    pub fn contains_category(&self, name: &str) -> bool {
        self.0.values().any(|g| g.categories.iter().any(|c| c == name))
    }

    /// Resolve the group a category currently belongs to
    ///
    /// Recomputed per call; categories removed from the taxonomy resolve to
    /// `None` even when transactions still carry the name.
    pub fn owning_group(&self, category: &str) -> Option<(&str, &CategoryGroup)> {
        self.0
            .iter()
            .find(|(_, g)| g.categories.iter().any(|c| c == category))
            .map(|(k, g)| (k.as_str(), g))
    }

    /// Whether a category currently belongs to the investment group
    pub fn is_investment(&self, category: &str) -> bool {
        self.0
            .get(INVESTMENT_GROUP_KEY)
            .is_some_and(|g| g.categories.iter().any(|c| c == category))
    }

    /// Sum of all group target percents
    pub fn percent_total(&self) -> u32 {
        self.0.values().map(|g| g.percent as u32).sum()
    }
}
