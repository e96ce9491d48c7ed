use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Canvas {dim} must be greater than 0")]
    ZeroDimension { dim: &'static str },

    #[error("Number of rows must be greater than 0")]
    ZeroRows,

    #[cfg(not(feature = "rustface"))]
    #[error("Face detection support was not compiled in; rebuild with the 'rustface' feature")]
    DetectionUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
