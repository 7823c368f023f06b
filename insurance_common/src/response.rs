//! Response body of the quote endpoint.

use serde::{Deserialize, Serialize};

use crate::offers::{ModifierSource, Offer, generate_offers};
use crate::pricing::compute_fair_price_at;
use crate::request::QuoteRequest;

/// Fair price plus one offer per company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Clamped fair price in SAR.
    pub fair_price: i64,
    /// Company offers in fixed company order.
    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl QuoteResponse {
    /// Price `request` for `current_year` and derive offers from `source`.
    pub fn build<S>(request: &QuoteRequest, current_year: i64, source: &mut S) -> Self
    where
        S: ModifierSource + ?Sized,
    {
        let fair_price = compute_fair_price_at(request, current_year).fair_price;
        QuoteResponse {
            fair_price,
            offers: generate_offers(fair_price, source),
        }
    }
}
