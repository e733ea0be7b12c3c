//! Error types for the PokeAPI client
//!
//! The cache itself cannot fail; these cover fetching and decoding responses.

use thiserror::Error;

// == Api Error Enum ==
/// Errors raised while fetching or decoding remote data.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Remote answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A REPL command was issued without its required argument
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
}

// == Result Type Alias ==
/// Convenience Result type for the client.
pub type Result<T> = std::result::Result<T, ApiError>;
