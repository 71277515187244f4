use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::CliError;

/// Source of raw answers for the survey.
pub trait Prompter {
    /// Returns the user's answer to `prompt`, possibly empty.
    fn ask(&mut self, prompt: &str) -> Result<String, CliError>;
}

/// Terminal prompts rendered by dialoguer.
pub struct InteractivePrompter {
    theme: ColorfulTheme,
}

impl InteractivePrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for InteractivePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for InteractivePrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(CliError::from)
    }
}

/// One answer per input line; used for scripted runs and tests.
pub struct ScriptPrompter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::InputExhausted(prompt.to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
