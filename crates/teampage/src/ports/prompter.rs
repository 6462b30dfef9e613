//! Prompter Port
//!
//! Abstract interface for the interactive dialogue: free text, a single
//! choice from a list, and yes/no confirmation.

use std::collections::VecDeque;

use crate::domain::errors::TeamPageError;

/// Interface for asking the user questions, one at a time
pub trait Prompter {
    /// Ask for free text; an empty answer is allowed
    fn input(&mut self, message: &str) -> Result<String, TeamPageError>;

    /// Ask the user to pick one of `choices`, returning its index
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, TeamPageError>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> Result<bool, TeamPageError>;

    /// Print a blank progress line between dialogue sections
    fn blank_line(&mut self) {}
}

/// One canned answer for [`ScriptedPrompter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Choice(usize),
    Confirm(bool),
}

impl Answer {
    pub fn text(s: impl Into<String>) -> Self {
        Answer::Text(s.into())
    }
}

/// Prompter that replays a fixed list of answers and records every question
///
/// Runs the dialogue without a terminal. Running out of answers, or finding
/// an answer of the wrong kind, is a `TeamPageError::Prompt`.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Result<Answer, TeamPageError> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| TeamPageError::Prompt(format!("No scripted answer for: {}", message)))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str) -> Result<String, TeamPageError> {
        match self.next(message)? {
            Answer::Text(s) => Ok(s),
            other => Err(TeamPageError::Prompt(format!(
                "Expected text for '{}', got {:?}",
                message, other
            ))),
        }
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, TeamPageError> {
        match self.next(message)? {
            Answer::Choice(i) if i < choices.len() => Ok(i),
            other => Err(TeamPageError::Prompt(format!(
                "Expected one of {} choices for '{}', got {:?}",
                choices.len(),
                message,
                other
            ))),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool, TeamPageError> {
        match self.next(message)? {
            Answer::Confirm(b) => Ok(b),
            other => Err(TeamPageError::Prompt(format!(
                "Expected yes/no for '{}', got {:?}",
                message, other
            ))),
        }
    }
}
