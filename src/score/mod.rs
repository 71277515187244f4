//! Budget Bee scoring: the pure score function and the stateful session that
//! keeps a score current as transactions arrive.

pub mod session;

pub use session::{Profile, ScoreSession, ScoreState, ScoreUpdate, SessionState};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Score reported when no monthly budget is configured.
pub const NEUTRAL_SCORE: u8 = 50;
pub const MIN_SCORE: u8 = 10;
pub const MAX_SCORE: u8 = 100;
/// Spending beyond this multiple of the budget carries no further penalty.
pub const RATIO_CAP: f64 = 1.5;
const POINTS_PER_RATIO: f64 = 60.0;

/// Maps spending against a monthly budget onto a score in `[10, 100]`.
///
/// A budget that is zero, negative, or non-finite counts as unset and yields
/// [`NEUTRAL_SCORE`]. Otherwise the spend ratio is capped at [`RATIO_CAP`]
/// and scored linearly: `0 → 100`, `1 → 40`, `1.5 → 10`. Ties round half
/// away from zero.
pub fn compute_score(total_spent: f64, monthly_budget: f64) -> u8 {
    if !monthly_budget.is_finite() || monthly_budget <= 0.0 {
        return NEUTRAL_SCORE;
    }

    let ratio = (total_spent / monthly_budget).min(RATIO_CAP);
    let raw = 100.0 - ratio * POINTS_PER_RATIO;
    raw.round().clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8
}

/// Coarse reading of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    /// Spent almost nothing.
    Thriving,
    /// Under budget, doing well.
    OnTrack,
    /// Getting close to the budget.
    Approaching,
    Overspending,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreBand::Thriving,
            70..=89 => ScoreBand::OnTrack,
            40..=69 => ScoreBand::Approaching,
            _ => ScoreBand::Overspending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Thriving => "thriving",
            ScoreBand::OnTrack => "on track",
            ScoreBand::Approaching => "approaching budget",
            ScoreBand::Overspending => "overspending",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
