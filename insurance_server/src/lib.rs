//! Fair insurance quote HTTP service.
//!
//! The service is a thin axum layer over `insurance_common`:
//! - `config` — command-line/environment configuration.
//! - `error` — server error type and its HTTP mapping.
//! - `handlers` — the liveness and quote endpoints.
//! - `routes` — router assembly with CORS.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ServerError;
pub use routes::create_router;
