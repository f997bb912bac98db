//! ANSI text styling
//!
//! Named color and font style tables, the capability check, and the
//! formatter that wraps text in escape sequences.

pub mod formatter;
pub mod palette;
pub mod support;

pub use formatter::StyleFormatter;
pub use palette::{Color, FontStyle};
pub use support::{is_supported, Support};
