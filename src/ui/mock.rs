//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use hunch::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_response("idea", "mobile dog grooming");
//!
//! // Use ui in code under test...
//! ui.success("Done!");
//!
//! let answer = ui.prompt(&Prompt::input("idea", "Your idea?")).unwrap();
//! assert_eq!(answer.as_str(), "mobile dog grooming");
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{HunchError, Result};

use super::{
    OutputMode, Prompt, PromptResult, PromptType, ScoreReport, SpinnerHandle, UserInterface,
};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Supports both persistent responses (via `set_response`) and queued
/// responses (via `queue_responses`) for keys prompted multiple times.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    progress: Vec<(usize, usize)>,
    spinners: Vec<String>,
    reports: Vec<ScoreReport>,
    responses: HashMap<String, String>,
    response_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

/// Spinner handle that records nothing.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_and_clear(&mut self) {}
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a persistent response for a prompt key.
    pub fn set_response(&mut self, key: &str, response: &str) {
        self.responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue responses for a prompt key, returned in order.
    ///
    /// Once the queue is exhausted, lookup falls back to `set_response`.
    pub fn queue_responses(&mut self, key: &str, responses: &[&str]) {
        let queue = responses.iter().map(|s| s.to_string()).collect();
        self.response_queues.insert(key.to_string(), queue);
    }

    /// All captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All captured progress updates.
    pub fn progress(&self) -> &[(usize, usize)] {
        &self.progress
    }

    /// All captured spinner start messages.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// All captured score reports.
    pub fn reports(&self) -> &[ScoreReport] {
        &self.reports
    }

    /// Keys of every prompt shown, in order.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(queue) = self.response_queues.get_mut(key) {
            if let Some(front) = queue.pop_front() {
                return Some(front);
            }
        }
        self.responses.get(key).cloned()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());
        let response = self
            .next_response(&prompt.key)
            .ok_or_else(|| HunchError::NotInteractive {
                prompt: prompt.key.clone(),
            })?;

        match &prompt.prompt_type {
            PromptType::Input => Ok(PromptResult::String(response)),
            PromptType::Confirm { .. } => {
                let answer = matches!(response.to_lowercase().as_str(), "true" | "yes" | "y");
                Ok(PromptResult::Bool(answer))
            }
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.progress.push((current, total));
    }

    fn show_score_report(&mut self, report: &ScoreReport) {
        self.reports.push(report.clone());
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
