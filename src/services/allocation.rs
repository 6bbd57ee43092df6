//! Budget-allocation comparator
//!
//! Compares what each category group actually received in a month against
//! the target implied by its configured income percentage. The investment
//! group is compared like any other: for it, "actual" means amount
//! invested, and Over is a good sign rather than a warning. The caller
//! decides how to present that.

use crate::models::{CategoryGroup, Ledger, Money, Month, Period, INVESTMENT_GROUP_KEY};
use crate::services::Metrics;

/// Whether a group landed above or at/below its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStatus {
    Over,
    Under,
}

/// One group's row in the monthly allocation comparison
#[derive(Debug, Clone)]
pub struct GroupAllocation {
    pub key: String,
    pub name: String,
    pub percent: u8,
    /// Month income scaled by the group's percentage
    pub target: Money,
    /// What the group's categories actually received this month
    pub actual: Money,
    pub status: AllocationStatus,
    /// Absolute distance between actual and target
    pub magnitude: Money,
}

impl GroupAllocation {
    /// Overspending in a consumption group is bad; exceeding the
    /// investment target is not.
    pub fn is_warning(&self) -> bool {
        self.status == AllocationStatus::Over && self.key != INVESTMENT_GROUP_KEY
    }
}

fn group_actual(metrics: &Metrics<'_>, group: &CategoryGroup, month: Month) -> Money {
    let window = Period::Month(month);
    let mut spending = metrics.spending_by_category(window);
    let invested = metrics.investment_by_category_for(window);
    group
        .categories
        .iter()
        .filter_map(|c| spending.remove(c).or_else(|| invested.get(c).copied()))
        .sum()
}

/// Compare each group's actual monthly flow against its percentage target
///
/// Targets are derived from the month's income, so with zero income every
/// target is zero and any spending at all reads as Over.
pub fn allocation_breakdown(ledger: &Ledger, month: Month) -> Vec<GroupAllocation> {
    let metrics = Metrics::new(ledger);
    let income = metrics.income_for(Period::Month(month));

    ledger
        .category_groups
        .iter()
        .map(|(key, group)| {
            let target = Money::from_cents(income.cents() * i64::from(group.percent) / 100);
            let actual = group_actual(&metrics, group, month);
            let status = if actual > target {
                AllocationStatus::Over
            } else {
                AllocationStatus::Under
            };
            GroupAllocation {
                key: key.clone(),
                name: group.name.clone(),
                percent: group.percent,
                target,
                actual,
                status,
                magnitude: (actual - target).abs(),
            }
        })
        .collect()
}
