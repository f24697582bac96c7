//! Error types for resource link handling and structural copies.

use thiserror::Error;

/// Failure to interpret a string as a compute resource URL or path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{0:?} is not a valid resource URL")]
    MalformedUrl(String),
}

impl ParseError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ParseError::MalformedUrl(input) => input,
        }
    }
}

/// Rejected [`Key`](super::key::Key) construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key {0} must not be empty")]
    Empty(&'static str),
}

/// Failure of a serialize-then-deserialize copy, tagged with the phase that failed.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("deserialization error: {0}")]
    Deserialize(#[source] serde_json::Error),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;
pub type CopyResult<T> = std::result::Result<T, CopyError>;
