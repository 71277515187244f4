use serde::{Deserialize, Serialize};

use super::{taxonomy::Taxonomy, validate_amount};
use crate::errors::{LedgerError, Result};

/// Sum of one category's line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Self-reported monthly expenses laid out along a fixed [`Taxonomy`].
///
/// Amounts start at zero and are overwritten by [`ExpenseLedger::set_item`];
/// the taxonomy itself never changes after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseLedger {
    taxonomy: Taxonomy,
    amounts: Vec<Vec<f64>>,
}

impl ExpenseLedger {
    pub fn new(taxonomy: Taxonomy) -> Self {
        let amounts = taxonomy
            .categories()
            .iter()
            .map(|category| vec![0.0; category.items.len()])
            .collect();
        Self { taxonomy, amounts }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Overwrites the amount recorded for `category` / `item`.
    pub fn set_item(&mut self, category: &str, item: &str, amount: f64) -> Result<()> {
        let (cat_idx, item_idx) = self
            .position(category, item)
            .ok_or_else(|| LedgerError::unknown_entry(category, item))?;
        let amount = validate_amount(amount)?;
        self.amounts[cat_idx][item_idx] = amount;
        Ok(())
    }

    pub fn amount(&self, category: &str, item: &str) -> Option<f64> {
        self.position(category, item)
            .map(|(cat_idx, item_idx)| self.amounts[cat_idx][item_idx])
    }

    /// Per-category sums in taxonomy order.
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        self.taxonomy
            .categories()
            .iter()
            .zip(&self.amounts)
            .map(|(category, amounts)| CategoryTotal {
                category: category.name.clone(),
                total: amounts.iter().sum(),
            })
            .collect()
    }

    pub fn grand_total(&self) -> f64 {
        self.category_totals().iter().map(|entry| entry.total).sum()
    }

    /// Zeroes every line item, keeping the taxonomy.
    pub fn reset(&mut self) {
        for amounts in &mut self.amounts {
            amounts.iter_mut().for_each(|amount| *amount = 0.0);
        }
    }

    fn position(&self, category: &str, item: &str) -> Option<(usize, usize)> {
        let cat_idx = self
            .taxonomy
            .categories()
            .iter()
            .position(|entry| entry.name == category)?;
        let item_idx = self.taxonomy.categories()[cat_idx]
            .items
            .iter()
            .position(|candidate| candidate == item)?;
        Some((cat_idx, item_idx))
    }
}

impl Default for ExpenseLedger {
    fn default() -> Self {
        Self::new(Taxonomy::survey_default())
    }
}
