//! ANSI capability detection
//!
//! The heuristic is coarse: any OS name containing "win"
//! (case-insensitive) is treated as unable to render escape sequences.

use std::sync::OnceLock;

static SUPPORTED: OnceLock<bool> = OnceLock::new();

/// Whether escape sequences render on an OS with the given name
#[must_use]
pub fn os_supports_ansi(os: &str) -> bool {
    !os.to_ascii_lowercase().contains("win")
}

/// Process-wide capability flag, computed on first use
pub fn is_supported() -> bool {
    *SUPPORTED.get_or_init(|| {
        let supported = os_supports_ansi(std::env::consts::OS);
        tracing::debug!(os = std::env::consts::OS, supported, "detected ANSI support");
        supported
    })
}

/// Capability used by a formatter when rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Support {
    /// Use the process-wide detected flag
    #[default]
    Detect,
    /// Always emit escape sequences
    Always,
    /// Never emit escape sequences
    Never,
}

impl Support {
    /// Resolve to a concrete yes/no
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Detect => is_supported(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}
