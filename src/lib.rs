#![doc(test(attr(deny(warnings))))]

//! Budget Bee tallies self-reported monthly expenses and bank transactions
//! and condenses them into a single budget score.
//!
//! ```
//! use budget_bee::{ledger::Taxonomy, score::ScoreSession};
//!
//! let mut session = ScoreSession::new(Taxonomy::survey_default(), 200.0)?;
//! session.add_transaction(50.0, "groceries")?;
//! let update = session.add_transaction(30.0, "fuel")?;
//! assert_eq!(update.total_spent, 80.0);
//! assert_eq!(update.score, 76);
//! # Ok::<(), budget_bee::errors::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod feed;
pub mod ledger;
pub mod score;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Bee tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
