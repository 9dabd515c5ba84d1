//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::error::{HunchError, Result};

use super::{Prompt, PromptResult, PromptType};

/// Convert dialoguer errors to HunchError.
fn map_dialoguer_err(e: dialoguer::Error) -> HunchError {
    HunchError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Confirm { default } => prompt_confirm(prompt, *default, term),
    }
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    if let Some(placeholder) = &prompt.placeholder {
        term.write_line(&format!("  {}", style(placeholder).dim()))
            .map_err(HunchError::Io)?;
    }

    // Empty submissions flow back to the wizard, which ignores them; the
    // run loop re-prompts on unchanged state.
    let result: String = Input::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::String(result))
}

fn prompt_confirm(prompt: &Prompt, default: bool, term: &Term) -> Result<PromptResult> {
    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}
