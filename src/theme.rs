//! Theme configuration parser
//!
//! Parses a TOML theme file into named, reusable text styles:
//!
//! ```toml
//! [styles.error]
//! foreground = "red"
//! font_styles = ["bold"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::style::StyleFormatter;

/// One named style as written in the theme file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Foreground color name
    #[serde(default)]
    pub foreground: Option<String>,
    /// Background color name
    #[serde(default)]
    pub background: Option<String>,
    /// Font style names, in order
    #[serde(default)]
    pub font_styles: Vec<String>,
}

impl StyleConfig {
    /// Build a formatter from the configured names
    pub fn to_formatter(&self) -> Result<StyleFormatter> {
        let mut formatter = StyleFormatter::new();
        if let Some(ref fg) = self.foreground {
            formatter.set_foreground_color(fg)?;
        }
        if let Some(ref bg) = self.background {
            formatter.set_background_color(bg)?;
        }
        formatter.set_font_styles(&self.font_styles)?;
        Ok(formatter)
    }
}

/// Named styles loaded from a theme file
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: BTreeMap<String, StyleFormatter>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    styles: BTreeMap<String, StyleConfig>,
}

impl Theme {
    /// Parse a theme file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in theme file {}", path.display()))
    }

    /// Parse theme content from a string.
    ///
    /// Every color and font style name is checked here, so a bad theme
    /// fails before anything is rendered.
    pub fn parse(content: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(content).context("Failed to parse theme")?;
        let mut styles = BTreeMap::new();
        for (name, config) in file.styles {
            let formatter = config
                .to_formatter()
                .with_context(|| format!("in style '{name}'"))?;
            styles.insert(name, formatter);
        }
        tracing::debug!(count = styles.len(), "loaded theme");
        Ok(Self { styles })
    }

    /// Formatter for a named style
    #[must_use]
    pub fn formatter(&self, name: &str) -> Option<StyleFormatter> {
        self.styles.get(name).cloned()
    }

    /// Style names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}
