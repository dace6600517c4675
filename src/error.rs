//! Error types for search query construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to construct search endpoint: {0}")]
    EndpointConstruction(#[from] url::ParseError),

    #[error("Invalid price filter '{0}'. Use: all, free, paid (or 0, 1, 2)")]
    InvalidPrice(String),
}

pub type Result<T> = std::result::Result<T, Error>;
