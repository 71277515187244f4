use thiserror::Error;

/// Error type that captures ledger, scoring, and configuration failures.
///
/// Every fallible operation in the crate is atomic: when one of these is
/// returned, the value it was called on is left exactly as it was.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Unknown category/item: {category} / {item}")]
    UnknownEntry { category: String, item: String },
    #[error("Invalid amount: {0} (amounts must be finite and non-negative)")]
    InvalidAmount(f64),
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    pub fn unknown_entry(category: impl Into<String>, item: impl Into<String>) -> Self {
        LedgerError::UnknownEntry {
            category: category.into(),
            item: item.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
