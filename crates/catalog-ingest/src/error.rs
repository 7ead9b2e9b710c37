use thiserror::Error;

/// Failure of the underlying catalog stream. Any of these aborts the import.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog near byte {position}: {message}")]
    Malformed { position: u64, message: String },
    #[error("catalog ended with {open_elements} unclosed element(s)")]
    Truncated { open_elements: usize },
}

pub type Result<T> = std::result::Result<T, IngestError>;
