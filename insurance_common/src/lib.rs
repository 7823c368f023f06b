//!
//! Common types and pricing logic shared by the insurance server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `coerce` — lenient parsing of form values into integers and text.
//! - `request` — the `QuoteRequest` payload accepted by the quote endpoint.
//! - `city` — known cities and their risk table.
//! - `company` — the fixed, ordered list of insurance companies.
//! - `pricing` — fair price computation.
//! - `offers` — randomized company offers derived from a fair price.
//! - `response` — the JSON body returned by the quote endpoint.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod coerce;
pub mod request;
pub mod city;
pub mod company;
pub mod pricing;
pub mod offers;
pub mod response;
pub mod net;

pub use error::QuoteError;
pub use result::Result;
pub use request::QuoteRequest;
pub use response::QuoteResponse;
