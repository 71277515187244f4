//! Bank transaction records and the built-in demo feed.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// A transaction as reported by a bank export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BankRecord {
    pub amount: f64,
    pub merchant: String,
    pub category: String,
    pub date: NaiveDate,
}

impl BankRecord {
    /// Free-text description used when the record becomes a transaction,
    /// e.g. `Chipotle (Food) on 2025-11-01`.
    pub fn description(&self) -> String {
        format!(
            "{} ({}) on {}",
            self.merchant,
            self.category,
            self.date.format("%Y-%m-%d")
        )
    }

    /// `(amount, description)` pair accepted by the transaction importers.
    pub fn to_entry(&self) -> (f64, String) {
        (self.amount, self.description())
    }
}

/// Parses a JSON array of bank records.
pub fn parse_records(json: &str) -> Result<Vec<BankRecord>> {
    Ok(serde_json::from_str(json)?)
}

static SAMPLE_FEED: Lazy<Vec<BankRecord>> = Lazy::new(|| {
    [
        (12.75, "Chipotle", "Food", 1),
        (8.50, "Subway", "Food", 3),
        (5.25, "Starbucks", "Food", 4),
        (45.99, "Target", "Shopping", 2),
        (27.49, "Amazon", "Shopping", 5),
        (60.00, "Walmart", "Shopping", 7),
        (18.20, "Uber", "Transportation", 3),
        (14.75, "Lyft", "Transportation", 6),
        (35.00, "Shell Gas", "Transportation", 9),
        (65.00, "Verizon", "Bills", 1),
        (90.00, "Comcast", "Bills", 1),
        (120.00, "Electric Co", "Bills", 8),
        (10.99, "Spotify", "Entertainment", 2),
        (15.49, "Netflix", "Entertainment", 4),
        (22.00, "AMC Theaters", "Entertainment", 10),
        (30.00, "Gym", "Other", 5),
        (12.00, "Misc Store", "Other", 6),
    ]
    .into_iter()
    .filter_map(|(amount, merchant, category, day)| {
        NaiveDate::from_ymd_opt(2025, 11, day).map(|date| BankRecord {
            amount,
            merchant: merchant.to_string(),
            category: category.to_string(),
            date,
        })
    })
    .collect()
});

/// Fixed demo bank history for November 2025.
pub fn sample_records() -> &'static [BankRecord] {
    &SAMPLE_FEED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_feed_is_complete() {
        let records = sample_records();
        assert_eq!(records.len(), 17);
        let total: f64 = records.iter().map(|r| r.amount).sum();
        assert!((total - 593.41).abs() < 1e-9);
    }

    #[test]
    fn description_names_merchant_category_and_date() {
        let first = &sample_records()[0];
        assert_eq!(first.description(), "Chipotle (Food) on 2025-11-01");
    }

    #[test]
    fn parses_json_records() {
        let json = r#"[
            {"amount": 4.5, "merchant": "Kiosk", "category": "Food", "date": "2025-12-24"}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records[0].to_entry(), (4.5, "Kiosk (Food) on 2025-12-24".to_string()));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_records("[{\"amount\": 1}]").is_err());
    }
}
