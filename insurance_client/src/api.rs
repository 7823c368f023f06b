//! Sending quote requests to the server over HTTP.
//!
//! `QuoteService` is the seam between the interactive session and the network so
//! the session can be exercised without a running server.
use std::time::Duration;

use insurance_common::net::quote_url;
use insurance_common::{QuoteError, QuoteResponse, Result};
use log::{debug, info};
use reqwest::blocking::Client;

use crate::form::QuoteForm;

/// Request timeout for a single quote call.
const TIMEOUT_SECS: u64 = 10;

/// Something that can turn a form into a quote.
pub trait QuoteService {
    /// Submit `form` and return the priced offers.
    fn request_quote(&self, form: &QuoteForm) -> Result<QuoteResponse>;
}

/// `QuoteService` backed by the HTTP endpoint.
pub struct HttpQuoteService {
    client: Client,
    endpoint: String,
}

impl HttpQuoteService {
    /// Create a service talking to the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| QuoteError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: quote_url(base_url),
        })
    }

    /// Full URL of the quote endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl QuoteService for HttpQuoteService {
    fn request_quote(&self, form: &QuoteForm) -> Result<QuoteResponse> {
        let payload = form.payload();
        info!("Sending quote request to {}", self.endpoint);
        debug!("Payload: {:?}", payload);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|e| QuoteError::Transport(e.to_string()))?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_targets_quote_route() {
        let service = HttpQuoteService::new("http://localhost:3000/").unwrap();
        assert_eq!(service.endpoint(), "http://localhost:3000/api/quote");
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        let service = HttpQuoteService::new("http://127.0.0.1:1").unwrap();
        let result = service.request_quote(&QuoteForm::default());
        assert!(matches!(result, Err(QuoteError::Transport(_))));
    }
}
