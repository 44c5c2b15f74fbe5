//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, codec, resize and config errors, and provides semantic
//! variants for scale validation and argument failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Scale factor must be a finite number greater than 0, got: {scale}")]
    InvalidScale { scale: f64 },

    #[error("Scale factor {scale} turns {width}x{height} into an empty image")]
    ZeroDimension { width: u32, height: u32, scale: f64 },

    #[error("Scaled size {width}x{height} is too large to allocate")]
    DimensionOverflow { width: u64, height: u64 },

    #[error("Cannot determine an image format for: {path:?}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },
}
