//! Interactive terminal UI.

use std::io::Write;

use console::Term;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, HunchTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    Prompt, PromptResult, ScoreReport, SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: HunchTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            HunchTheme::new()
        } else {
            HunchTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            writeln!(
                self.term,
                "{}",
                self.theme
                    .dim
                    .apply_to(format!("[Question {}/{}]", current, total))
            )
            .ok();
        }
    }

    fn show_score_report(&mut self, report: &ScoreReport) {
        let b = &self.theme.border;
        let score_style = self.theme.score_style(report.band);

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            b.apply_to("Validation Results ───────────────")
        )
        .ok();
        writeln!(
            self.term,
            "  {} Idea:  {}",
            b.apply_to("│"),
            self.theme.highlight.apply_to(report.idea.trim())
        )
        .ok();
        writeln!(
            self.term,
            "  {} Score: {} {}",
            b.apply_to("│"),
            score_style.apply_to(format!("{}/100", report.score)),
            self.theme.dim.apply_to(format!("({})", report.band)),
        )
        .ok();
        writeln!(
            self.term,
            "  {}",
            b.apply_to("├────────────────────────────────────")
        )
        .ok();

        for rule in &report.breakdown {
            let icon = if rule.earned > 0 {
                self.theme.success.apply_to("✓").to_string()
            } else {
                self.theme.dim.apply_to("○").to_string()
            };
            writeln!(
                self.term,
                "  {} {} {:<22} {:>2}/{}",
                b.apply_to("│"),
                icon,
                rule.category,
                rule.earned,
                rule.max,
            )
            .ok();
        }

        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();
        writeln!(self.term).ok();
        writeln!(self.term, "  {}", report.message).ok();
        writeln!(self.term).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
