//! Error types for hunch operations.
//!
//! The wizard core itself signals no errors (invalid input is a guarded
//! no-op); errors here come from the surrounding CLI and terminal layer.

use thiserror::Error;

/// Core error type for hunch operations.
#[derive(Debug, Error)]
pub enum HunchError {
    /// A prompt was requested but no interactive terminal is attached.
    #[error("'{prompt}' needs an interactive terminal; re-run hunch in a terminal")]
    NotInteractive { prompt: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for hunch operations.
pub type Result<T> = std::result::Result<T, HunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_interactive_displays_prompt_key() {
        let err = HunchError::NotInteractive {
            prompt: "idea".into(),
        };
        assert!(err.to_string().contains("idea"));
        assert!(err.to_string().contains("interactive"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HunchError = io_err.into();
        assert!(matches!(err, HunchError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(HunchError::NotInteractive {
                prompt: "email".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
