//! Error types for cover generation and auditing

use thiserror::Error;

/// Result type alias for covergen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or auditing covers
#[derive(Error, Debug)]
pub enum Error {
    /// The article path given on the command line does not exist
    #[error("Article path not found: {0}")]
    ArticleNotFound(String),

    /// A source image could not be decoded
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Network failure while fetching a remote asset
    #[error("Network error: {0}")]
    Network(String),

    /// Style identifier not present in the dispatch table
    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    /// Failure while writing the output image or its backup
    #[error("Output error: {0}")]
    Output(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}
