use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate_amount;
use crate::errors::{LedgerError, Result};

/// An ad-hoc expense recorded outside the survey ledger.
///
/// Deserialization applies the same amount check as [`Transaction::new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "TransactionRecord")]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            amount: validate_amount(amount)?,
            description: description.into(),
        })
    }
}

#[derive(Deserialize)]
struct TransactionRecord {
    id: Uuid,
    amount: f64,
    #[serde(default)]
    description: String,
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = LedgerError;

    fn try_from(record: TransactionRecord) -> Result<Self> {
        Ok(Self {
            id: record.id,
            amount: validate_amount(record.amount)?,
            description: record.description,
        })
    }
}

/// Append-only, insertion-ordered list of transactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionList {
    transactions: Vec<Transaction>,
}

impl TransactionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transaction and returns its id.
    pub fn add(&mut self, amount: f64, description: impl Into<String>) -> Result<Uuid> {
        let transaction = Transaction::new(amount, description)?;
        let id = transaction.id;
        self.transactions.push(transaction);
        Ok(id)
    }

    /// Appends a whole batch, or nothing if any amount is invalid.
    pub fn extend_from<I, S>(&mut self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        let staged = entries
            .into_iter()
            .map(|(amount, description)| Transaction::new(amount, description))
            .collect::<Result<Vec<_>>>()?;
        let added = staged.len();
        self.transactions.extend(staged);
        Ok(added)
    }

    pub fn sum(&self) -> f64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }
}
