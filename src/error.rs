//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image, and resize errors, and provides semantic
//! variants for argument validation and processing failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ResizeBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Invalid color format: {value}. Use '#RRGGBB' or '#RGB'")]
    InvalidColor { value: String },

    #[error("No images found in: {}", folder.display())]
    NoImages { folder: std::path::PathBuf },

    #[error("Face model error: {0}")]
    FaceModel(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
