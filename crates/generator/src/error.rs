//! Generation error types.

use thiserror::Error;

/// Errors that abort a generation.
///
/// Icon processing failures are deliberately absent: they are recovered
/// inside [`crate::icon::process_icon`] and never abort a generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result type for generation operations.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;
