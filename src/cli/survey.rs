//! The monthly expense questionnaire.

use crate::cli::{io::Prompter, output, CliError};
use crate::config::Config;
use crate::feed::{self, BankRecord};
use crate::score::{Profile, ScoreSession, ScoreState};

const GUEST_USERNAME: &str = "guest";

/// Answer validation for a numeric prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRule {
    /// Expenses: finite and non-negative.
    NonNegative,
    /// Budgets: any finite number; zero or below means "unset".
    Finite,
}

impl NumberRule {
    fn accepts(self, value: f64) -> bool {
        match self {
            NumberRule::NonNegative => value.is_finite() && value >= 0.0,
            NumberRule::Finite => value.is_finite(),
        }
    }
}

/// Keeps asking until the answer parses and passes `rule`. An empty answer
/// returns `None` when `allow_empty` is set.
pub fn ask_number<P: Prompter + ?Sized>(
    prompter: &mut P,
    prompt: &str,
    allow_empty: bool,
    rule: NumberRule,
) -> Result<Option<f64>, CliError> {
    loop {
        let answer = prompter.ask(prompt)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            if allow_empty {
                return Ok(None);
            }
            output::warning("A value is required.");
            continue;
        }
        match trimmed.trim_start_matches('$').parse::<f64>() {
            Ok(value) if rule.accepts(value) => return Ok(Some(value)),
            _ => output::warning(match rule {
                NumberRule::NonNegative => "Invalid input. Please enter a non-negative number.",
                NumberRule::Finite => "Invalid input. Please enter a number.",
            }),
        }
    }
}

/// Runs the whole survey: identity, bank history, expenses, budget, score.
pub fn run_survey<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &Config,
) -> Result<ScoreSession, CliError> {
    let username = prompter.ask("Enter your username")?;
    let username = match username.trim() {
        "" => GUEST_USERNAME.to_string(),
        name => name.to_string(),
    };
    output::success(format!("Welcome, {username}."));

    let mut session = ScoreSession::new(config.taxonomy.clone(), config.monthly_budget)?
        .with_profile(Profile::new(username));

    if config.load_sample_feed {
        let added =
            session.import_transactions(feed::sample_records().iter().map(BankRecord::to_entry))?;
        output::info(format!("Loaded {added} bank transactions."));
    }

    output::section("Monthly expenses");
    output::info("Enter your expenses for THIS month (press ENTER to skip an item).");
    for category in config.taxonomy.categories() {
        output::section(&category.name);
        for item in &category.items {
            let amount = ask_number(&mut *prompter, item, true, NumberRule::NonNegative)?;
            session.set_expense(&category.name, item, amount.unwrap_or(0.0))?;
        }
    }

    // A budget from the configuration file can be accepted with ENTER.
    let configured = config.monthly_budget > 0.0;
    let prompt = if configured {
        format!(
            "What is your TOTAL monthly budget (ENTER keeps {})",
            output::format_money(config.monthly_budget, &config.currency)
        )
    } else {
        "What is your TOTAL monthly budget".to_string()
    };
    let budget = ask_number(&mut *prompter, &prompt, configured, NumberRule::Finite)?
        .unwrap_or(config.monthly_budget);
    session.set_monthly_budget(budget)?;

    session.initialize();
    Ok(session)
}

/// Human-readable report of a computed score.
pub fn format_summary(state: &ScoreState, currency: &str) -> String {
    let mut lines = vec!["Your monthly spending summary:".to_string()];
    lines.extend(state.category_totals.iter().map(|entry| {
        format!(
            "  {}: {}",
            entry.category,
            output::format_money(entry.total, currency)
        )
    }));
    lines.push(String::new());
    lines.push(format!(
        "Total spent this month (survey + bank transactions): {}",
        output::format_money(state.total_spent, currency)
    ));
    lines.push(format!(
        "Your Budget Bee score: {} ({})",
        state.score,
        state.band()
    ));
    lines.join("\n")
}
