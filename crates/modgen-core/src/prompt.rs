//! Interactive chooser capability.
//!
//! Generation flows sometimes need an answer from the user: which module a
//! component belongs to, whether to apply a specialized template, the name
//! of a new project. The engine consumes those answers through the
//! [`Chooser`] trait so the terminal UI stays outside the core. Every call
//! is a suspension point; a cancelled prompt surfaces as
//! [`Error::Cancelled`](crate::Error::Cancelled) and abandons the whole
//! operation before any file is written.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Interactive decision capability consumed by the generators.
#[async_trait]
pub trait Chooser: Send + Sync {
    /// Single-select from an enumerated list of choices. Returns the chosen
    /// string.
    async fn select(&self, prompt: &str, choices: &[String]) -> Result<String>;

    /// Yes/no confirmation with a default answer.
    async fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Free-text input with an optional default. When `allow_empty` is
    /// false, implementations must not return an empty string.
    async fn input(&self, prompt: &str, default: Option<&str>, allow_empty: bool)
        -> Result<String>;
}

/// A [`Chooser`] that replays canned answers in order.
///
/// Used by the test suites and by non-interactive callers. Each queue is
/// consumed front to back; an exhausted queue behaves like a cancelled
/// prompt.
#[derive(Debug, Default)]
pub struct ScriptedChooser {
    selections: Mutex<VecDeque<String>>,
    confirmations: Mutex<VecDeque<bool>>,
    inputs: Mutex<VecDeque<String>>,
}

impl ScriptedChooser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next `select` call.
    pub fn with_selection(self, choice: impl Into<String>) -> Self {
        self.selections.lock().unwrap().push_back(choice.into());
        self
    }

    /// Queue an answer for the next `confirm` call.
    pub fn with_confirmation(self, answer: bool) -> Self {
        self.confirmations.lock().unwrap().push_back(answer);
        self
    }

    /// Queue an answer for the next `input` call.
    pub fn with_input(self, text: impl Into<String>) -> Self {
        self.inputs.lock().unwrap().push_back(text.into());
        self
    }
}

#[async_trait]
impl Chooser for ScriptedChooser {
    async fn select(&self, _prompt: &str, choices: &[String]) -> Result<String> {
        let answer = self
            .selections
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(Error::Cancelled)?;
        if !choices.contains(&answer) {
            return Err(Error::config(format!(
                "scripted selection '{answer}' is not one of the offered choices"
            )));
        }
        Ok(answer)
    }

    async fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
        self.confirmations
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(Error::Cancelled)
    }

    async fn input(
        &self,
        _prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<String> {
        let answer = match self.inputs.lock().unwrap().pop_front() {
            Some(text) => text,
            None => default.map(str::to_string).ok_or(Error::Cancelled)?,
        };
        if answer.is_empty() && !allow_empty {
            return Err(Error::config("scripted input must not be empty"));
        }
        Ok(answer)
    }
}
