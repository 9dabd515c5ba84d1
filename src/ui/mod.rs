//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped/headless invocations
//! - [`MockUI`] with scripted responses for tests
//!
//! The wizard core never touches a terminal; commands render exclusively
//! through this trait, so the interactive flow is testable end to end.

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, HunchTheme};

use crate::error::Result;
use crate::scoring::ScoreBand;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for a waiting period.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show questionnaire progress (e.g., "Question 3 of 5").
    fn show_progress(&mut self, current: usize, total: usize);

    /// Show the results screen for a scored idea.
    fn show_score_report(&mut self, report: &ScoreReport);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Stop the spinner and print a success line.
    fn finish_success(&mut self, msg: &str);

    /// Stop the spinner and erase it.
    fn finish_and_clear(&mut self);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for mock response lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Example answer shown as a dim hint above the input.
    pub placeholder: Option<String>,
    /// The type of prompt.
    pub prompt_type: PromptType,
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Free-form text input. Empty submissions are passed through to the
    /// caller; the wizard treats them as a guarded no-op.
    Input,
    /// Yes/no confirmation with a default.
    Confirm { default: bool },
}

impl Prompt {
    /// Create a free-text input prompt.
    pub fn input(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            placeholder: None,
            prompt_type: PromptType::Input,
        }
    }

    /// Create a yes/no confirmation prompt.
    pub fn confirm(key: &str, question: &str, default: bool) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            placeholder: None,
            prompt_type: PromptType::Confirm { default },
        }
    }

    /// Attach a placeholder hint.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }
}

/// Result of a prompt.
#[derive(Debug, Clone)]
pub enum PromptResult {
    /// String result from input.
    String(String),
    /// Boolean result from confirm.
    Bool(bool),
}

impl PromptResult {
    /// Get as a string slice (booleans render as "true"/"false").
    pub fn as_str(&self) -> &str {
        match self {
            Self::String(s) => s.as_str(),
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Per-question line of the results breakdown.
#[derive(Debug, Clone)]
pub struct RuleResult {
    /// Display label of the question's category.
    pub category: &'static str,
    /// Points the answer earned.
    pub earned: u8,
    /// Points the question could have earned.
    pub max: u8,
}

/// Everything the results screen needs to render.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// The idea text as entered.
    pub idea: String,
    /// Final score in [0, 100].
    pub score: u8,
    /// Band the score falls in (drives the color).
    pub band: ScoreBand,
    /// Canned verdict for the band.
    pub message: &'static str,
    /// Per-question breakdown, in questionnaire order.
    pub breakdown: Vec<RuleResult>,
}
