use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// One category of the survey together with its ordered line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaxonomyCategory {
    pub name: String,
    pub items: Vec<String>,
}

impl TaxonomyCategory {
    pub fn new<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// The fixed category → line item layout an [`ExpenseLedger`] is built from.
///
/// Order is significant: totals and survey prompts follow the order in which
/// categories and items were declared.
///
/// [`ExpenseLedger`]: super::ExpenseLedger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<TaxonomyCategory>", into = "Vec<TaxonomyCategory>")]
pub struct Taxonomy {
    categories: Vec<TaxonomyCategory>,
}

impl Taxonomy {
    /// Builds a taxonomy, rejecting blank names and duplicates.
    pub fn new(categories: Vec<TaxonomyCategory>) -> Result<Self> {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(LedgerError::InvalidTaxonomy(
                    "category names cannot be empty".into(),
                ));
            }
            if !seen_categories.insert(name) {
                return Err(LedgerError::InvalidTaxonomy(format!(
                    "duplicate category `{name}`"
                )));
            }
            let mut seen_items = HashSet::new();
            for item in &category.items {
                let item = item.trim();
                if item.is_empty() {
                    return Err(LedgerError::InvalidTaxonomy(format!(
                        "category `{name}` has an empty line item"
                    )));
                }
                if !seen_items.insert(item) {
                    return Err(LedgerError::InvalidTaxonomy(format!(
                        "duplicate line item `{item}` in category `{name}`"
                    )));
                }
            }
        }
        Ok(Self { categories })
    }

    /// The monthly expense questionnaire used when no taxonomy is configured.
    pub fn survey_default() -> Self {
        Self {
            categories: vec![
                TaxonomyCategory::new(
                    "Housing",
                    [
                        "Rent or mortgage",
                        "Insurance (home, car, etc)",
                        "Utilities (Gas, Electric, Water, etc)",
                        "Internet and phone",
                        "Other housing expenses",
                    ],
                ),
                TaxonomyCategory::new(
                    "Food",
                    [
                        "Groceries and household supplies",
                        "Eating out / food delivery",
                        "Other food expenses",
                    ],
                ),
                TaxonomyCategory::new(
                    "Transportation",
                    [
                        "Public transportation",
                        "Taxis / rideshares",
                        "Gas for cars",
                        "Parking and tolls",
                        "Car maintenance",
                        "Car insurance",
                        "Car payment",
                        "Other transportation expenses",
                    ],
                ),
                TaxonomyCategory::new(
                    "Health",
                    [
                        "Health insurance",
                        "Prescriptions",
                        "Doctor co-pays",
                        "Other health expenses",
                    ],
                ),
                TaxonomyCategory::new(
                    "Personal and family",
                    [
                        "Childcare",
                        "Child support you pay",
                        "Money you send to family",
                    ],
                ),
            ],
        }
    }

    pub fn categories(&self) -> &[TaxonomyCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&TaxonomyCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn contains(&self, category: &str, item: &str) -> bool {
        self.category(category)
            .is_some_and(|entry| entry.items.iter().any(|candidate| candidate == item))
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::survey_default()
    }
}

impl TryFrom<Vec<TaxonomyCategory>> for Taxonomy {
    type Error = LedgerError;

    fn try_from(categories: Vec<TaxonomyCategory>) -> Result<Self> {
        Self::new(categories)
    }
}

impl From<Taxonomy> for Vec<TaxonomyCategory> {
    fn from(taxonomy: Taxonomy) -> Self {
        taxonomy.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_default_keeps_declaration_order() {
        let taxonomy = Taxonomy::survey_default();
        let names: Vec<&str> = taxonomy
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Housing",
                "Food",
                "Transportation",
                "Health",
                "Personal and family"
            ]
        );
        assert_eq!(taxonomy.item_count(), 23);
        assert!(taxonomy.contains("Food", "Other food expenses"));
        assert!(!taxonomy.contains("Food", "Rent or mortgage"));
    }

    #[test]
    fn rejects_duplicate_categories() {
        let err = Taxonomy::new(vec![
            TaxonomyCategory::new("Food", ["Groceries"]),
            TaxonomyCategory::new("Food", ["Snacks"]),
        ])
        .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidTaxonomy(_)));
    }

    #[test]
    fn rejects_duplicate_items_and_blank_names() {
        assert!(Taxonomy::new(vec![TaxonomyCategory::new("Food", ["A", "A"])]).is_err());
        assert!(Taxonomy::new(vec![TaxonomyCategory::new(" ", ["A"])]).is_err());
        assert!(Taxonomy::new(vec![TaxonomyCategory::new("Food", [""])]).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Taxonomy =
            serde_json::from_str(r#"[{"name":"Fun","items":["Games","Books"]}]"#).unwrap();
        assert_eq!(ok.categories().len(), 1);

        let bad = serde_json::from_str::<Taxonomy>(
            r#"[{"name":"Fun","items":[]},{"name":"Fun","items":[]}]"#,
        );
        assert!(bad.is_err());
    }
}
