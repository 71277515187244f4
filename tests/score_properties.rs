mod common;

use budget_bee::{
    errors::LedgerError,
    ledger::{ExpenseLedger, Taxonomy, TransactionList},
    score::{compute_score, ScoreSession},
};

#[test]
fn unset_budget_scores_neutral_for_any_spend() {
    for budget in [0.0, -0.01, -500.0] {
        for spent in [0.0, 0.5, 199.99, 1e9] {
            assert_eq!(compute_score(spent, budget), 50, "spent={spent} budget={budget}");
        }
    }
}

#[test]
fn score_is_non_increasing_in_spend() {
    for budget in [1.0, 37.5, 200.0, 4_000.0] {
        let mut previous = u8::MAX;
        let mut spent = 0.0;
        while spent <= budget * 2.0 {
            let score = compute_score(spent, budget);
            assert!(score <= previous);
            previous = score;
            spent += budget / 97.0;
        }
    }
}

#[test]
fn boundary_values() {
    assert_eq!(compute_score(0.0, 100.0), 100);
    assert_eq!(compute_score(100.0, 100.0), 40);
    assert_eq!(compute_score(150.0, 100.0), 10);
    assert_eq!(compute_score(1000.0, 100.0), 10);
}

#[test]
fn half_points_round_away_from_zero() {
    assert_eq!(compute_score(25.0, 200.0), 93);
    assert_eq!(compute_score(75.0, 200.0), 78);
}

#[test]
fn grand_total_matches_category_totals() {
    let mut ledger = ExpenseLedger::new(Taxonomy::survey_default());
    ledger.set_item("Housing", "Rent or mortgage", 1200.0).unwrap();
    ledger.set_item("Food", "Eating out / food delivery", 86.4).unwrap();
    ledger.set_item("Health", "Prescriptions", 12.1).unwrap();
    ledger.set_item("Personal and family", "Childcare", 300.0).unwrap();

    let totals = ledger.category_totals();
    assert_eq!(totals.len(), 5);
    let summed: f64 = totals.iter().map(|entry| entry.total).sum();
    assert_eq!(ledger.grand_total(), summed);
}

#[test]
fn unknown_category_is_rejected() {
    let mut ledger = ExpenseLedger::new(Taxonomy::survey_default());
    let err = ledger.set_item("NotACategory", "x", 10.0).unwrap_err();
    match err {
        LedgerError::UnknownEntry { category, item } => {
            assert_eq!(category, "NotACategory");
            assert_eq!(item, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_transaction_is_rejected() {
    let mut list = TransactionList::new();
    assert!(matches!(list.add(-5.0, ""), Err(LedgerError::InvalidAmount(_))));
    assert_eq!(list.sum(), 0.0);
}

#[test]
fn end_to_end_two_transactions() {
    let mut session = ScoreSession::new(common::household_taxonomy(), 200.0).unwrap();
    session.add_transaction(50.0, "").unwrap();
    let update = session.add_transaction(30.0, "").unwrap();
    assert_eq!(update.total_spent, 80.0);
    assert_eq!(update.score, 76);
}
