//! Error types for bootcamp
//!
//! Every exercise, calculator and report shares this taxonomy so the
//! binary can report failures uniformly.

use thiserror::Error;

/// Main error type for the bootcamp exercises
#[derive(Error, Debug)]
pub enum BootcampError {
    /// Input that parsed but makes no sense for the exercise
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Input stream ended while a prompt was waiting
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed { prompt: String },

    /// Line editor failures other than EOF
    #[error("Readline error: {0}")]
    Readline(String),

    /// Arithmetic that does not fit the result type
    #[error("Overflow computing {0}")]
    Overflow(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Dataset shape problems (missing column, malformed line)
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// PDF/receipt rendering failures
    #[error("Report generation failed: {0}")]
    Report(String),

    /// PDF library errors
    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for bootcamp operations
pub type Result<T> = std::result::Result<T, BootcampError>;

/// Convert anyhow errors coming out of the line editor
impl From<anyhow::Error> for BootcampError {
    fn from(err: anyhow::Error) -> Self {
        BootcampError::Readline(err.to_string())
    }
}
