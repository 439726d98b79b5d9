//! # Style Error Types
//!
//! Rendering never fails. Errors only come from loading style sheets.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building styles from configuration.
#[derive(Error, Debug)]
pub enum StyleError {
    /// A color literal could not be parsed.
    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),

    /// The style sheet file could not be read.
    #[error("failed to read style sheet {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The style sheet is not valid TOML or has the wrong shape.
    #[error("invalid style sheet: {0}")]
    Parse(#[from] toml::de::Error),
}
