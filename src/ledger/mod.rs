//! Expense ledger, transaction list, and per-category budget tracking.

pub mod budget;
pub mod expense;
pub mod taxonomy;
pub mod transaction;

pub use budget::Budget;
pub use expense::{CategoryTotal, ExpenseLedger};
pub use taxonomy::{Taxonomy, TaxonomyCategory};
pub use transaction::{Transaction, TransactionList};

use crate::errors::{LedgerError, Result};

/// Accepts finite, non-negative amounts.
pub(crate) fn validate_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        tracing::warn!(amount, "rejected invalid amount");
        Err(LedgerError::InvalidAmount(amount))
    }
}
