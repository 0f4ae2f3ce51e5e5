// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the dataset tools.

use std::fmt;

/// Result type alias for dataset tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Main error type for the dataset tools.
#[derive(Debug)]
pub enum ToolError {
    /// Error opening or decoding a video file.
    VideoError(String),
    /// Error reading, decoding, or encoding images.
    ImageError(String),
    /// Dataset layout error (missing `images/` or `labels/` directories).
    DatasetError(String),
    /// IO error with context (file not found, permission denied, etc.).
    IoError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VideoError(msg) => write!(f, "Video error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::DatasetError(msg) => write!(f, "Dataset error: {msg}"),
            Self::IoError(msg) => write!(f, "IO error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ToolError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for ToolError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}
