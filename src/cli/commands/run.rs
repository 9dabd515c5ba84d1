//! The `run` command: the interactive validation wizard.
//!
//! Drives a [`Wizard`] session through the rendering layer: idea prompt,
//! the five validation questions, the results screen, and the delayed
//! email-capture prompt for eligible scores. The wizard owns all session
//! state; this command only forwards user input and re-reads state.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::questions::questions;
use crate::scoring::{self, score_message, ScoreBand};
use crate::ui::{Prompt, RuleResult, ScoreReport, UserInterface};
use crate::wizard::{Step, Wizard, REVEAL_DELAY};

use super::dispatcher::{Command, CommandResult};

/// Poll interval while waiting for the email-capture reveal.
const REVEAL_POLL: Duration = Duration::from_millis(25);

/// Interactive wizard command.
pub struct RunCommand {
    args: RunArgs,
    reveal_delay: Duration,
}

impl RunCommand {
    /// Create a run command with the production reveal delay.
    pub fn new(args: RunArgs) -> Self {
        Self::with_reveal_delay(args, REVEAL_DELAY)
    }

    /// Create a run command with a custom reveal delay (tests).
    pub fn with_reveal_delay(args: RunArgs, reveal_delay: Duration) -> Self {
        Self { args, reveal_delay }
    }

    /// Walk one full session: idea, five answers, results.
    fn run_session(&self, wizard: &mut Wizard, ui: &mut dyn UserInterface) -> Result<()> {
        while wizard.step() == Step::Input {
            let idea = ui.prompt(
                &Prompt::input("idea", "What's your side hustle idea?")
                    .with_placeholder("e.g., mobile dog grooming for busy professionals"),
            )?;
            wizard.submit_idea(idea.as_str());
            if wizard.step() == Step::Input {
                ui.warning("An idea can't be blank.");
            }
        }

        while let Some(question) = wizard.current_question() {
            let index = wizard.current_index();
            ui.show_progress(index + 1, questions().len());
            ui.message(question.category);
            let answer = ui.prompt(
                &Prompt::input(question.id.as_str(), question.prompt)
                    .with_placeholder(question.placeholder),
            )?;
            wizard.submit_answer(answer.as_str());
            if wizard.step() == Step::Validation && wizard.current_index() == index {
                ui.warning("Blank answers score zero; give it a real one.");
            }
        }

        debug!(score = ?wizard.score(), "session complete");
        ui.show_score_report(&build_report(wizard));
        self.capture_email(wizard, ui)
    }

    /// The delayed email-capture prompt on the results screen.
    ///
    /// Presentation-only: the address is acknowledged, not stored or sent.
    fn capture_email(&self, wizard: &Wizard, ui: &mut dyn UserInterface) -> Result<()> {
        if !wizard.email_capture_pending() && !wizard.show_email_capture() {
            return Ok(());
        }

        let mut spinner = ui.start_spinner("Preparing your full report...");
        while !wizard.show_email_capture() {
            thread::sleep(REVEAL_POLL);
        }
        spinner.finish_and_clear();

        let email = ui.prompt(&Prompt::input(
            "email",
            "Email for your free validation report (blank to skip)",
        ))?;
        let email = email.as_str().trim().to_string();
        if !email.is_empty() {
            ui.success(&format!("Noted - your report will go to {}.", email));
        }
        Ok(())
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Hunch - Side Hustle Validator");
        ui.message("Five questions. One honest score. No sugarcoating.");

        let mut wizard = Wizard::with_reveal_delay(self.reveal_delay);
        loop {
            self.run_session(&mut wizard, ui)?;

            if self.args.once {
                break;
            }
            let again = ui
                .prompt(&Prompt::confirm("again", "Validate another idea?", false))?
                .as_bool()
                .unwrap_or(false);
            if !again {
                break;
            }
            wizard.reset();
        }

        ui.success("Good hustle. Now go test it in the real world.");
        Ok(CommandResult::success())
    }
}

/// Assemble the results screen data from a finished session.
fn build_report(wizard: &Wizard) -> ScoreReport {
    let score = wizard.score().unwrap_or(0);
    let breakdown = questions()
        .iter()
        .map(|q| RuleResult {
            category: q.category,
            earned: scoring::points_for(q.id, wizard.answers().get(q.id)),
            max: scoring::max_points(q.id),
        })
        .collect();

    ScoreReport {
        idea: wizard.idea().to_string(),
        score,
        band: ScoreBand::of(score),
        message: score_message(score),
        breakdown,
    }
}
