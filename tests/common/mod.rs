use budget_bee::{
    ledger::{Taxonomy, TaxonomyCategory},
    score::ScoreSession,
};

/// Two-category taxonomy small enough to reason about in assertions.
pub fn household_taxonomy() -> Taxonomy {
    Taxonomy::new(vec![
        TaxonomyCategory::new("Housing", ["Rent", "Utilities"]),
        TaxonomyCategory::new("Food", ["Groceries", "Eating out"]),
    ])
    .expect("valid taxonomy")
}

#[allow(dead_code)]
pub fn household_session(monthly_budget: f64) -> ScoreSession {
    ScoreSession::new(household_taxonomy(), monthly_budget).expect("session")
}
