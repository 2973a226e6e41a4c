// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors raised while loading menu styles.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or parsing menu styles.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Style file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Style file exists but could not be read.
    #[error("Failed to read theme file {path:?}: {source}")]
    ReadError {
        /// The path of the unreadable file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Style source is not valid TOML or does not match the expected layout.
    #[error("Failed to parse theme from {origin}: {details}")]
    ThemeParseError {
        /// Where the source came from (a path, or `<inline>`).
        origin: String,
        /// Details about the parse error.
        details: String,
    },
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a parse error.
    pub fn parse_error(origin: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ThemeParseError {
            origin: origin.into(),
            details: details.into(),
        }
    }
}
