//! Error types used by the quote server.
//!
//! Pricing never fails, so the only request-level failure is a body that is
//! not valid JSON. It is reported as a generic `500` with a plain-text body;
//! the details go to the log, not to the client.

use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use thiserror::Error;

/// Unified error type for the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The request body could not be decoded as JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Socket I/O failure while binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid startup configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        warn!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
