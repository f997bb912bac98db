//! Error types for styling and prompting
//!
//! Library operations that callers need to match on return these typed
//! errors. Configuration loading uses `anyhow` and wraps them with context.

use std::io;

use thiserror::Error;

/// Errors raised while configuring a [`StyleFormatter`](crate::StyleFormatter)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A color or font style name is not in the lookup table
    #[error("Invalid {kind} specified: \"{name}\". Expected one of ({})", .expected.join(", "))]
    InvalidArgument {
        /// What was being set ("foreground color", "font style", ...)
        kind: &'static str,
        /// The rejected name, exactly as given
        name: String,
        /// Every accepted name, in table order
        expected: Vec<&'static str>,
    },
}

impl StyleError {
    pub(crate) fn invalid(kind: &'static str, name: &str, expected: &[&'static str]) -> Self {
        Self::InvalidArgument {
            kind,
            name: name.to_string(),
            expected: expected.to_vec(),
        }
    }
}

/// Errors returned by [`QuestionHelper::ask`](crate::QuestionHelper::ask)
#[derive(Debug, Error)]
pub enum AskError {
    /// The validator rejected every answer within the attempt budget
    #[error("no valid answer after {attempts} attempt(s): {last}")]
    Exhausted {
        /// Number of answers that were read and rejected
        attempts: u32,
        /// The validator's error for the final attempt
        last: anyhow::Error,
    },
    /// Writing the prompt or reading the answer failed
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_lists_expected() {
        let err = StyleError::invalid("font style", "shiny", &["bold", "dark"]);
        assert_eq!(
            err.to_string(),
            "Invalid font style specified: \"shiny\". Expected one of (bold, dark)"
        );
    }

    #[test]
    fn test_exhausted_message_includes_last_error() {
        let err = AskError::Exhausted {
            attempts: 3,
            last: anyhow::anyhow!("too short"),
        };
        assert_eq!(
            err.to_string(),
            "no valid answer after 3 attempt(s): too short"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: AskError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, AskError::Io(_)));
    }
}
