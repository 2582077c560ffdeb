//! Error types for vizwire-core

use thiserror::Error;

/// Result type alias for vizwire-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in vizwire-core
#[derive(Debug, Error)]
pub enum Error {
    /// An argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An element offset or index fell outside the addressable range
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Bytes or text did not match the expected layout
    #[error("Format error: {0}")]
    Format(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No factory registered for a link type tag
    #[error("Unknown link type: {0}")]
    UnknownLinkType(String),

    /// A wire document could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// An empty chain was asked to produce a buffer
    #[error("Transform chain is empty")]
    EmptyChain,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Io(std::io::Error::new(std::io::ErrorKind::Other, err))
    }
}
