//! Error types for legacy text parsing.
//!
//! Malformed markup is never an error: every bad directive rolls back to
//! literal text. The types here cover the fallible public helpers and
//! misuse of the embedding API.

use thiserror::Error;

/// Errors that can occur when configuring or running a parse.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A replacement pattern failed to compile.
    #[error("invalid replacement pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// The pattern source as given by the caller.
        pattern: String,
        /// The regex engine's description of the problem.
        message: String,
    },

    /// The legacy color character collides with fixed markup syntax.
    #[error("`{0}` cannot be used as the color character")]
    ReservedColorChar(char),

    /// Replacement output kept matching rules past the depth limit.
    #[error("replacement recursion exceeded {0} levels")]
    ReplacementDepthExceeded(usize),
}

impl ParseError {
    pub(crate) fn invalid_pattern(pattern: &str, err: regex::Error) -> Self {
        ParseError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Unknown color namespace (expected `minecraft`, `css` or `hex`).
    #[error("unknown color namespace: {0}")]
    UnknownNamespace(String),
}
