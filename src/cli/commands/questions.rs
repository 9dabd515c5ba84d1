//! The `questions` command: list the validation questionnaire.

use crate::cli::args::QuestionsArgs;
use crate::error::Result;
use crate::questions::questions;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Lists the five validation questions.
pub struct QuestionsCommand {
    args: QuestionsArgs,
}

impl QuestionsCommand {
    /// Create a questions command.
    pub fn new(args: QuestionsArgs) -> Self {
        Self { args }
    }
}

impl Command for QuestionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            // Straight to stdout so the output stays pipeable.
            let json = serde_json::to_string_pretty(questions()).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Validation Questions");
        for (i, question) in questions().iter().enumerate() {
            ui.message(&format!(
                "{}. [{}] {}",
                i + 1,
                question.category,
                question.prompt
            ));
            ui.message(&format!("   {}", question.placeholder));
        }
        Ok(CommandResult::success())
    }
}
