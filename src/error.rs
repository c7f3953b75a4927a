//! Error types for the uznlp library.
//!
//! Text processing itself never fails: malformed input and collaborator
//! failures are recovered where they happen. The errors defined here surface
//! configuration mistakes (unknown stemming strategy, unreadable stop word
//! file, missing analyzer) at construction time.
//!
//! # Examples
//!
//! ```
//! use uznlp::error::{Result, UznlpError};
//!
//! fn pick_strategy(name: &str) -> Result<()> {
//!     Err(UznlpError::config(format!("unknown stemming strategy: {name}")))
//! }
//!
//! assert!(pick_strategy("porter").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for uznlp operations.
#[derive(Error, Debug)]
pub enum UznlpError {
    /// I/O errors (config files, stop word lists, lemma dictionaries)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (unknown strategy, missing collaborator, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with UznlpError.
pub type Result<T> = std::result::Result<T, UznlpError>;

impl UznlpError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        UznlpError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        UznlpError::Analysis(msg.into())
    }
}
