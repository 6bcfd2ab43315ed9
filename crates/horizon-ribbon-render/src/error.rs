//! Error types for the drawing contract.

use thiserror::Error;

/// Errors produced when parsing a color from a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string was not 6 (`rrggbb`) or 8 (`rrggbbaa`) hex digits long.
    #[error("invalid hex color {input:?}: expected 6 or 8 digits, got {length}")]
    InvalidLength {
        /// The offending input string.
        input: String,
        /// The number of digits found.
        length: usize,
    },

    /// The string contained a non-hexadecimal digit.
    #[error("invalid hex color {0:?}: non-hexadecimal digit")]
    InvalidDigit(String),
}
