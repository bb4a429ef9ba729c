//! Error types for rendering.

use thiserror::Error;

/// Errors that can abort a render.
#[derive(Error, Debug)]
pub enum Error {
    /// A vector or scalar division had a zero divisor.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Camera, image or scene parameters cannot produce a valid render.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Writing pixel data or reading a scene file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The scene description is not valid TOML for this renderer.
    #[error("malformed scene file: {0}")]
    SceneFile(#[from] toml::de::Error),

    /// PNG encoding failed.
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;
