//! Interactive prompting
//!
//! Questions with defaults, normalizers and validators, asked over a
//! line-oriented console channel.

pub mod helper;
pub mod io;
pub mod question;

pub use helper::QuestionHelper;
pub use io::{ConsoleIo, StreamIo};
pub use question::{Normalizer, Question, Validator};
