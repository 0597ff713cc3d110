//! # Theme Error Types

use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A color string could not be parsed.
    #[error("Invalid hex color {value:?}: {reason}")]
    InvalidHexColor {
        /// The string that failed to parse.
        value: String,
        /// Why it failed.
        reason: &'static str,
    },
}
