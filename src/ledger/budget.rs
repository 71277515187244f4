use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::validate_amount;
use crate::errors::{LedgerError, Result};

/// Per-category spending guardrails.
///
/// Tracks a limit and an accumulated spend per category name. A category with
/// no limit is never considered overspent. This tracker is independent of the
/// budget score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "BudgetRecord")]
pub struct Budget {
    limits: BTreeMap<String, f64>,
    spending: BTreeMap<String, f64>,
}

#[derive(Deserialize)]
struct BudgetRecord {
    #[serde(default)]
    limits: BTreeMap<String, f64>,
    #[serde(default)]
    spending: BTreeMap<String, f64>,
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = LedgerError;

    fn try_from(record: BudgetRecord) -> Result<Self> {
        for amount in record.limits.values().chain(record.spending.values()) {
            validate_amount(*amount)?;
        }
        Ok(Self {
            limits: record.limits,
            spending: record.spending,
        })
    }
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_limit(&mut self, category: impl Into<String>, amount: f64) -> Result<()> {
        let amount = validate_amount(amount)?;
        self.limits.insert(category.into(), amount);
        Ok(())
    }

    pub fn add_spending(&mut self, category: impl Into<String>, amount: f64) -> Result<()> {
        let amount = validate_amount(amount)?;
        *self.spending.entry(category.into()).or_insert(0.0) += amount;
        Ok(())
    }

    pub fn limit(&self, category: &str) -> Option<f64> {
        self.limits.get(category).copied()
    }

    pub fn spent(&self, category: &str) -> f64 {
        self.spending.get(category).copied().unwrap_or(0.0)
    }

    /// Headroom left under the limit; negative once overspent.
    pub fn remaining(&self, category: &str) -> Option<f64> {
        self.limit(category).map(|limit| limit - self.spent(category))
    }

    pub fn is_overspending(&self, category: &str) -> bool {
        self.spent(category) > self.limit(category).unwrap_or(f64::INFINITY)
    }

    pub fn overspent_categories(&self) -> Vec<&str> {
        self.spending
            .keys()
            .map(String::as_str)
            .filter(|category| self.is_overspending(category))
            .collect()
    }

    pub fn total_spent(&self) -> f64 {
        self.spending.values().sum()
    }
}
