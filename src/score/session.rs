use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{compute_score, ScoreBand};
use crate::errors::{LedgerError, Result};
use crate::ledger::{CategoryTotal, ExpenseLedger, Taxonomy, TransactionList};

/// Identity details handed over by whatever authenticated the user.
///
/// The session only carries these along for presentation; it never inspects
/// or validates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Profile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Last computed score together with the inputs it summarises.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreState {
    pub score: u8,
    pub total_spent: f64,
    pub category_totals: Vec<CategoryTotal>,
}

impl ScoreState {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Result of folding one more transaction into the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreUpdate {
    pub score: u8,
    pub total_spent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Initialized,
}

/// Survey ledger, extra transactions, and monthly budget, scored together.
///
/// Every recomputation reads the full ledger and transaction history, so the
/// cached [`ScoreState`] always matches a from-scratch computation over the
/// current inputs.
#[derive(Debug, Clone)]
pub struct ScoreSession {
    ledger: ExpenseLedger,
    transactions: TransactionList,
    monthly_budget: f64,
    current: Option<ScoreState>,
    profile: Option<Profile>,
}

impl ScoreSession {
    /// Creates a session over an empty ledger. A budget that is zero or
    /// negative means "unset"; non-finite budgets are rejected.
    pub fn new(taxonomy: Taxonomy, monthly_budget: f64) -> Result<Self> {
        Self::with_ledger(ExpenseLedger::new(taxonomy), TransactionList::new(), monthly_budget)
    }

    /// Wraps an already populated ledger and transaction history.
    pub fn with_ledger(
        ledger: ExpenseLedger,
        transactions: TransactionList,
        monthly_budget: f64,
    ) -> Result<Self> {
        Ok(Self {
            ledger,
            transactions,
            monthly_budget: check_budget(monthly_budget)?,
            current: None,
            profile: None,
        })
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn transactions(&self) -> &TransactionList {
        &self.transactions
    }

    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }

    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::Initialized
        } else {
            SessionState::Uninitialized
        }
    }

    pub fn current(&self) -> Option<&ScoreState> {
        self.current.as_ref()
    }

    pub fn score(&self) -> Option<u8> {
        self.current.as_ref().map(|state| state.score)
    }

    pub fn band(&self) -> Option<ScoreBand> {
        self.current.as_ref().map(ScoreState::band)
    }

    /// Computes and stores the score from the ledger plus all transactions.
    pub fn initialize(&mut self) -> ScoreState {
        let state = self.recompute();
        info!(
            score = state.score,
            total_spent = state.total_spent,
            "budget score initialized"
        );
        self.current = Some(state.clone());
        state
    }

    /// Records a transaction and rescores. Valid before [`initialize`], in
    /// which case it produces the first score.
    ///
    /// [`initialize`]: ScoreSession::initialize
    pub fn add_transaction(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<ScoreUpdate> {
        self.transactions.add(amount, description)?;
        let state = self.refresh_always();
        Ok(ScoreUpdate {
            score: state.score,
            total_spent: state.total_spent,
        })
    }

    /// Appends a batch of transactions atomically. The cached score is
    /// refreshed only when one already exists.
    pub fn import_transactions<I, S>(&mut self, entries: I) -> Result<usize>
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        let added = self.transactions.extend_from(entries)?;
        debug!(added, "imported transactions");
        self.refresh_if_initialized();
        Ok(added)
    }

    pub fn set_expense(&mut self, category: &str, item: &str, amount: f64) -> Result<()> {
        self.ledger.set_item(category, item, amount)?;
        self.refresh_if_initialized();
        Ok(())
    }

    pub fn set_monthly_budget(&mut self, monthly_budget: f64) -> Result<()> {
        self.monthly_budget = check_budget(monthly_budget)?;
        self.refresh_if_initialized();
        Ok(())
    }

    /// Pure recomputation over the current inputs; does not touch the cache.
    pub fn recompute(&self) -> ScoreState {
        let category_totals = self.ledger.category_totals();
        let ledger_total: f64 = category_totals.iter().map(|entry| entry.total).sum();
        let total_spent = ledger_total + self.transactions.sum();
        let score = compute_score(total_spent, self.monthly_budget);
        debug!(
            ledger_total,
            transactions = self.transactions.len(),
            total_spent,
            score,
            "recomputed budget score"
        );
        ScoreState {
            score,
            total_spent,
            category_totals,
        }
    }

    fn refresh_always(&mut self) -> &ScoreState {
        let state = self.recompute();
        self.current.insert(state)
    }

    fn refresh_if_initialized(&mut self) {
        if self.current.is_some() {
            self.refresh_always();
        }
    }
}

fn check_budget(monthly_budget: f64) -> Result<f64> {
    if monthly_budget.is_finite() {
        Ok(monthly_budget)
    } else {
        Err(LedgerError::InvalidAmount(monthly_budget))
    }
}
