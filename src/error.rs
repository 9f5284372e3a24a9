use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading resources or producing images
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Failed to load texture from {path}: {source}")]
    TextureLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config data: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
