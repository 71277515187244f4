//! Survey command-line front end.

pub mod io;
pub mod output;
pub mod survey;

use std::io::stdin;

use thiserror::Error;

use crate::config::ConfigManager;
use crate::errors::LedgerError;
use crate::utils::build_info;
use io::{InteractivePrompter, ScriptPrompter};

/// Presence of this variable switches the CLI to line-per-answer stdin input.
pub const SCRIPT_MODE_ENV: &str = "BUDGET_BEE_CLI_SCRIPT";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Input ended before `{0}` was answered")]
    InputExhausted(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let manager = ConfigManager::new()?;
    let config = manager.load()?;
    tracing::debug!(path = %manager.path().display(), ?mode, "configuration loaded");

    output::info(format!("Budget Bee {}", build_info::current()));

    let session = match mode {
        CliMode::Interactive => survey::run_survey(&mut InteractivePrompter::new(), &config)?,
        CliMode::Script => {
            let stdin = stdin();
            survey::run_survey(&mut ScriptPrompter::new(stdin.lock()), &config)?
        }
    };

    if let Some(state) = session.current() {
        output::section("Summary");
        output::info(survey::format_summary(state, &config.currency));
    }
    if let Some(profile) = session.profile() {
        output::info(format!("User {} logged out.", profile.username));
    }
    Ok(())
}
