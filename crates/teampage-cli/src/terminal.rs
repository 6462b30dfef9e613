//! Terminal prompter backed by dialoguer

use dialoguer::{Confirm, Input, Select};
use teampage::{Prompter, TeamPageError};

/// Asks questions on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(e: dialoguer::Error) -> TeamPageError {
    TeamPageError::Prompt(e.to_string())
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str) -> Result<String, TeamPageError> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, TeamPageError> {
        Select::new()
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&mut self, message: &str) -> Result<bool, TeamPageError> {
        Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()
            .map_err(prompt_error)
    }

    fn blank_line(&mut self) {
        println!();
    }
}
