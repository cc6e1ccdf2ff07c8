//! Centralized UI formatting and color utilities
//!
//! Stdout carries only command results; diagnostics go to stderr.

use colored::{ColoredString, Colorize};

use crate::intent::PatternOrigin;

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("CONFIRMA_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored marker for where a pattern came from.
///
/// Markers:
/// - Builtin: `builtin` (dimmed)
/// - Config: `config` (yellow)
pub fn origin_marker(origin: PatternOrigin) -> ColoredString {
    match origin {
        PatternOrigin::Builtin => "builtin".dimmed(),
        PatternOrigin::Config => "config".yellow(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (intent names)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}
