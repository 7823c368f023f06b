//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies common failure cases for I/O, serialization,
//! HTTP transport and configuration, allowing crates to propagate a single
//! error type. Pricing itself never fails: malformed input falls back to
//! defaults instead of producing an error.
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The HTTP request could not be completed (connection refused, timeout, etc.).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Invalid configuration value (bind address, server URL, ...).
    #[error("Configuration error: {0}")]
    Config(String),
}
