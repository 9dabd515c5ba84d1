//! Non-interactive UI for piped or headless invocations.
//!
//! Status output degrades to plain lines on stdout. Prompts cannot be
//! answered without a terminal: confirms resolve to their default, free-text
//! prompts fail with an actionable error.

use crate::error::{HunchError, Result};

use super::{
    OutputMode, Prompt, PromptResult, PromptType, ScoreReport, SpinnerHandle, UserInterface,
};

/// UI implementation for non-interactive contexts.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

/// Spinner that prints its message once instead of animating.
struct StaticSpinner;

impl SpinnerHandle for StaticSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_and_clear(&mut self) {}
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        match &prompt.prompt_type {
            PromptType::Confirm { default } => Ok(PromptResult::Bool(*default)),
            PromptType::Input => Err(HunchError::NotInteractive {
                prompt: prompt.key.clone(),
            }),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_status() {
            println!("{}", message);
        }
        Box::new(StaticSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!("[Question {}/{}]", current, total);
        }
    }

    fn show_score_report(&mut self, report: &ScoreReport) {
        println!("Idea:  {}", report.idea.trim());
        println!("Score: {}/100 ({})", report.score, report.band);
        for rule in &report.breakdown {
            println!("  {:<22} {:>2}/{}", rule.category, rule.earned, rule.max);
        }
        println!("{}", report.message);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_prompt_fails_without_terminal() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let result = ui.prompt(&Prompt::input("idea", "What's your idea?"));
        assert!(matches!(
            result,
            Err(HunchError::NotInteractive { prompt }) if prompt == "idea"
        ));
    }

    #[test]
    fn confirm_prompt_resolves_to_default() {
        let mut ui = NonInteractiveUI::new(OutputMode::Normal);
        let result = ui
            .prompt(&Prompt::confirm("again", "Go again?", false))
            .unwrap();
        assert_eq!(result.as_bool(), Some(false));
    }

    #[test]
    fn never_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }
}
