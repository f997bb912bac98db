//! Tinter - console toolkit
//!
//! Two small utilities for console applications: a formatter that wraps
//! text in ANSI color and font-style escape sequences, and a helper that
//! asks questions with defaults, normalization and bounded validation
//! retries.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod prompt;
pub mod style;
pub mod theme;

// Re-export commonly used types
pub use error::{AskError, StyleError};
pub use prompt::{ConsoleIo, Question, QuestionHelper, StreamIo};
pub use style::{Color, FontStyle, StyleFormatter, Support};
pub use theme::Theme;
