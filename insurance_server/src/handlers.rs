//! HTTP handlers.
//!
//! `POST /api/quote` reads the raw body instead of using the `Json` extractor:
//! a missing body, a body sent without a JSON content type, or a JSON value
//! that is not an object all price as an empty request. Only bytes that fail to
//! parse as JSON are rejected.

use axum::Json;
use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use insurance_common::net::HEALTH_MESSAGE;
use insurance_common::offers::RandomModifiers;
use insurance_common::pricing::current_year;
use insurance_common::{QuoteRequest, QuoteResponse};
use log::debug;
use serde_json::Value;

use crate::error::ServerError;

/// Liveness probe.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// Compute the fair price and company offers for the submitted attributes.
pub async fn quote(headers: HeaderMap, body: Bytes) -> Result<Json<QuoteResponse>, ServerError> {
    let request = parse_request(&headers, &body)?;
    let response = price(&request);
    debug!(
        "Quoted {:?}: fair_price={} offers={}",
        request,
        response.fair_price,
        response.offers.len()
    );
    Ok(Json(response))
}

fn price(request: &QuoteRequest) -> QuoteResponse {
    QuoteResponse::build(request, current_year(), &mut RandomModifiers::thread_local())
}

/// Decode the request body leniently.
pub fn parse_request(headers: &HeaderMap, body: &[u8]) -> Result<QuoteRequest, ServerError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(QuoteRequest::default());
    }

    match serde_json::from_slice::<Value>(body)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Ok(QuoteRequest::default()),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json; charset=utf-8"));
        headers
    }

    #[test]
    fn empty_body_is_empty_request() {
        let request = parse_request(&json_headers(), b"  ").unwrap();
        assert_eq!(request, QuoteRequest::default());
    }

    #[test]
    fn non_json_content_type_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        let request = parse_request(&headers, br#"{"city":"Riyadh"}"#).unwrap();
        assert_eq!(request, QuoteRequest::default());
    }

    #[test]
    fn only_plain_json_media_type_is_parsed() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/vnd.api+json"));
        let request = parse_request(&headers, br#"{"city":"Riyadh"}"#).unwrap();
        assert_eq!(request, QuoteRequest::default());

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("Application/JSON"));
        let request = parse_request(&headers, br#"{"city":"Riyadh"}"#).unwrap();
        assert_eq!(request.city.as_deref(), Some("Riyadh"));
    }

    #[test]
    fn null_and_arrays_price_as_empty() {
        assert_eq!(parse_request(&json_headers(), b"null").unwrap(), QuoteRequest::default());
        assert_eq!(parse_request(&json_headers(), b"[1,2]").unwrap(), QuoteRequest::default());
    }

    #[test]
    fn object_fields_are_coerced() {
        let request =
            parse_request(&json_headers(), br#"{"year":"2010","accidents":"x","city":"Mecca"}"#)
                .unwrap();
        assert_eq!(request.year, Some(2010));
        assert_eq!(request.accidents, None);
        assert_eq!(request.city.as_deref(), Some("Mecca"));
    }

    #[test]
    fn broken_json_is_an_error() {
        let result = parse_request(&json_headers(), b"{\"year\": ");
        assert!(matches!(result, Err(ServerError::MalformedBody(_))));
    }
}
