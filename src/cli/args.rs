//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Hunch - Interactive side hustle idea validation.
#[derive(Debug, Parser)]
#[command(name = "hunch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate an idea interactively (default if no command specified)
    Run(RunArgs),

    /// List the five validation questions
    Questions(QuestionsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Validate a single idea and exit without asking to go again
    #[arg(long)]
    pub once: bool,
}

/// Arguments for the `questions` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct QuestionsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_without_subcommand() {
        let cli = Cli::parse_from(["hunch"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = Cli::parse_from(["hunch", "--quiet", "--no-color", "run", "--once"]);
        assert!(cli.quiet);
        assert!(cli.no_color);
        match cli.command {
            Some(Commands::Run(args)) => assert!(args.once),
            other => panic!("expected run command, got {:?}", other),
        }
    }

    #[test]
    fn questions_accepts_json_flag() {
        let cli = Cli::parse_from(["hunch", "questions", "--json"]);
        match cli.command {
            Some(Commands::Questions(args)) => assert!(args.json),
            other => panic!("expected questions command, got {:?}", other),
        }
    }

    #[test]
    fn cli_command_is_well_formed() {
        Cli::command().debug_assert();
    }
}
