//! Text styling with ANSI SGR escape sequences
//!
//! A [`StyleFormatter`] holds an optional foreground color, an optional
//! background color and a list of font styles, and wraps text in the
//! matching escape sequence:
//!
//! ```
//! use tinter::{StyleFormatter, Support};
//!
//! let mut formatter = StyleFormatter::with_support(Support::Always);
//! formatter.set_foreground_color("red").unwrap();
//! formatter.set_background_color("blue").unwrap();
//! formatter.set_font_styles(["bold"]).unwrap();
//! assert_eq!(formatter.apply("x"), "\x1b[31;44;1mx\x1b[0m");
//! ```

use crate::error::StyleError;
use crate::style::palette::{Color, FontStyle};
use crate::style::support::Support;

/// Escape sequence introducer
const ESC: &str = "\x1b[";

/// Code that clears every attribute
const RESET: u8 = 0;

/// Mutable style holder that renders text with escape codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleFormatter {
    foreground: Option<u8>,
    background: Option<u8>,
    font_styles: Vec<u8>,
    support: Support,
}

impl StyleFormatter {
    /// Create an empty formatter that detects terminal support
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty formatter with pinned support
    #[must_use]
    pub fn with_support(support: Support) -> Self {
        Self {
            support,
            ..Self::default()
        }
    }

    /// Capability used by [`apply`](Self::apply)
    #[must_use]
    pub const fn support(&self) -> Support {
        self.support
    }

    /// Pin or release the capability used by [`apply`](Self::apply)
    pub fn set_support(&mut self, support: Support) {
        self.support = support;
    }

    /// Set the foreground color by table name
    pub fn set_foreground_color(&mut self, name: &str) -> Result<(), StyleError> {
        let color = lookup_color("foreground color", name)?;
        self.foreground(color);
        Ok(())
    }

    /// Set the background color by table name
    pub fn set_background_color(&mut self, name: &str) -> Result<(), StyleError> {
        let color = lookup_color("background color", name)?;
        self.background(color);
        Ok(())
    }

    /// Replace all font styles.
    ///
    /// Every name is resolved before anything changes; if one is invalid
    /// the current styles are left untouched.
    pub fn set_font_styles<I, S>(&mut self, names: I) -> Result<(), StyleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = names
            .into_iter()
            .map(|name| lookup_font_style(name.as_ref()).map(FontStyle::code))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::trace!(?codes, "replaced font styles");
        self.font_styles = codes;
        Ok(())
    }

    /// Append one font style by table name
    pub fn add_font_style(&mut self, name: &str) -> Result<(), StyleError> {
        let style = lookup_font_style(name)?;
        self.font_style(style);
        Ok(())
    }

    /// Set the foreground color
    pub fn foreground(&mut self, color: Color) -> &mut Self {
        tracing::trace!(color = color.name(), "set foreground");
        self.foreground = Some(color.foreground_code());
        self
    }

    /// Set the background color
    pub fn background(&mut self, color: Color) -> &mut Self {
        tracing::trace!(color = color.name(), "set background");
        self.background = Some(color.background_code());
        self
    }

    /// Append a font style
    pub fn font_style(&mut self, style: FontStyle) -> &mut Self {
        tracing::trace!(style = style.name(), "add font style");
        self.font_styles.push(style.code());
        self
    }

    /// Clear colors and font styles
    pub fn reset_style(&mut self) {
        self.foreground = None;
        self.background = None;
        self.font_styles.clear();
    }

    /// Stored foreground code, if any
    #[must_use]
    pub const fn foreground_code(&self) -> Option<u8> {
        self.foreground
    }

    /// Stored background code, if any
    #[must_use]
    pub const fn background_code(&self) -> Option<u8> {
        self.background
    }

    /// Stored font style codes, in insertion order, duplicates included
    #[must_use]
    pub fn font_style_codes(&self) -> &[u8] {
        &self.font_styles
    }

    /// Codes emitted by [`apply`](Self::apply): foreground, background,
    /// then each distinct font style by first occurrence
    #[must_use]
    pub fn codes(&self) -> Vec<u8> {
        let mut codes: Vec<u8> = self.foreground.into_iter().chain(self.background).collect();
        let mut seen = Vec::with_capacity(self.font_styles.len());
        for &code in &self.font_styles {
            if !seen.contains(&code) {
                seen.push(code);
                codes.push(code);
            }
        }
        codes
    }

    /// Wrap `text` in the configured escape sequence.
    ///
    /// Returns `text` unchanged when the terminal is judged unsupported.
    /// With nothing configured the opening sequence is the bare `ESC[m`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        if !self.support.enabled() {
            return text.to_string();
        }
        let codes = self
            .codes()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";");
        format!("{ESC}{codes}m{text}{ESC}{RESET}m")
    }
}

fn lookup_color(kind: &'static str, name: &str) -> Result<Color, StyleError> {
    Color::from_name(name).ok_or_else(|| {
        tracing::debug!(kind, color = name, "rejected color name");
        StyleError::invalid(kind, name, &Color::names())
    })
}

fn lookup_font_style(name: &str) -> Result<FontStyle, StyleError> {
    FontStyle::from_name(name).ok_or_else(|| {
        tracing::debug!(style = name, "rejected font style name");
        StyleError::invalid("font style", name, &FontStyle::names())
    })
}
