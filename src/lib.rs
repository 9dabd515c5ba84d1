//! Hunch - Interactive side hustle idea validation.
//!
//! Hunch is a CLI wizard that walks an idea through five fixed validation
//! questions and scores it with a transparent heuristic, so you can gut-check
//! a side hustle before sinking weekends into it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and command dispatch
//! - [`error`] - Error types and result aliases
//! - [`questions`] - The fixed five-question questionnaire
//! - [`scoring`] - The heuristic scoring rules and score bands
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`wizard`] - The session state machine driving the three screens
//!
//! # Example
//!
//! ```
//! use hunch::questions::{Answers, QuestionId};
//! use hunch::scoring::{compute, ScoreBand};
//!
//! let mut answers = Answers::new();
//! answers.insert(QuestionId::PaymentWillingness, "$50/month".to_string());
//! let score = compute(&answers);
//! assert_eq!(score, 25);
//! assert_eq!(ScoreBand::of(score), ScoreBand::Weak);
//! ```
//!
//! For the full interactive flow, see [`wizard::Wizard`].

pub mod cli;
pub mod error;
pub mod questions;
pub mod scoring;
pub mod ui;
pub mod wizard;

pub use error::{HunchError, Result};
