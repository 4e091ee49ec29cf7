use thiserror::Error;

/// Errors that can occur while generating or persisting a notebook
#[derive(Debug, Error)]
pub enum NotebookError {
    /// Destination file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be serialized to the interchange schema
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration value outside the supported scalar set
    #[error("Unsupported configuration value: {0}")]
    UnsupportedValue(String),
}

/// Type alias for Results using NotebookError
pub type Result<T> = std::result::Result<T, NotebookError>;
