//! Named colors and font styles with their SGR codes

use std::str::FromStr;

use crate::error::StyleError;

/// A terminal color usable as foreground or background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Code 30 / 40
    Black,
    /// Code 31 / 41
    Red,
    /// Code 32 / 42
    Green,
    /// Code 33 / 43
    Yellow,
    /// Code 34 / 44
    Blue,
    /// Code 35 / 45
    Magenta,
    /// Code 36 / 46
    Cyan,
    /// Code 37 / 47
    White,
    /// Terminal default, code 39 / 49
    Default,
}

impl Color {
    /// Every color, in table order
    pub const ALL: [Self; 9] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Default,
    ];

    /// Lowercase table name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Default => "default",
        }
    }

    /// Foreground SGR code (30-37, 39)
    #[must_use]
    pub const fn foreground_code(self) -> u8 {
        match self {
            Self::Default => 39,
            other => 30 + other as u8,
        }
    }

    /// Background SGR code (40-47, 49)
    #[must_use]
    pub const fn background_code(self) -> u8 {
        self.foreground_code() + 10
    }

    /// Exact, case-sensitive lookup by table name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// All table names, in order
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.name()).collect()
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::invalid("color", s, &Self::names()))
    }
}

/// A font attribute that combines with colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Code 1
    Bold,
    /// Code 2
    Dark,
    /// Code 3
    Italic,
    /// Code 4
    Underline,
    /// Code 5
    Blink,
    /// Code 7
    Reverse,
    /// Code 8
    Concealed,
}

impl FontStyle {
    /// Every style, in table order
    pub const ALL: [Self; 7] = [
        Self::Bold,
        Self::Dark,
        Self::Italic,
        Self::Underline,
        Self::Blink,
        Self::Reverse,
        Self::Concealed,
    ];

    /// Lowercase table name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Dark => "dark",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Blink => "blink",
            Self::Reverse => "reverse",
            Self::Concealed => "concealed",
        }
    }

    /// SGR code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Bold => 1,
            Self::Dark => 2,
            Self::Italic => 3,
            Self::Underline => 4,
            Self::Blink => 5,
            // 6 (rapid blink) is not in the table
            Self::Reverse => 7,
            Self::Concealed => 8,
        }
    }

    /// Exact, case-sensitive lookup by table name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// All table names, in order
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl FromStr for FontStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::invalid("font style", s, &Self::names()))
    }
}
