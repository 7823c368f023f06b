//! Quote request payload accepted by the quote endpoint.
//!
//! Every field is optional and coercible: numbers may arrive as JSON numbers or
//! as strings, and anything unparseable is treated as missing. Defaults are
//! applied by the accessor methods rather than at parse time, so the request
//! still records what the client actually sent.

use serde::{Deserialize, Serialize};

use crate::coerce::{lenient_int, lenient_text};

/// Accident count used when the field is missing or invalid.
pub const DEFAULT_ACCIDENTS: i64 = 0;
/// Driver age used when the field is missing or invalid.
pub const DEFAULT_DRIVER_AGE: i64 = 30;

/// Vehicle and driver attributes submitted for a quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Vehicle model. Informational only.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Year of manufacture.
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// City where the vehicle is registered.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Number of recorded accidents.
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub accidents: Option<i64>,
    /// Age of the driver.
    #[serde(default, deserialize_with = "lenient_int", skip_serializing_if = "Option::is_none")]
    pub driver_age: Option<i64>,
}

impl QuoteRequest {
    /// Manufacture year, falling back to `current_year` when missing or zero.
    pub fn manufacture_year(&self, current_year: i64) -> i64 {
        self.year.filter(|year| *year != 0).unwrap_or(current_year)
    }

    /// Accident count; missing or negative counts become [`DEFAULT_ACCIDENTS`].
    pub fn accident_count(&self) -> i64 {
        self.accidents
            .filter(|count| *count >= 0)
            .unwrap_or(DEFAULT_ACCIDENTS)
    }

    /// Driver age; missing or zero becomes [`DEFAULT_DRIVER_AGE`].
    pub fn driver_age_or_default(&self) -> i64 {
        self.driver_age
            .filter(|age| *age != 0)
            .unwrap_or(DEFAULT_DRIVER_AGE)
    }

    /// City name as submitted, or an empty string.
    pub fn city_name(&self) -> &str {
        self.city.as_deref().unwrap_or_default()
    }
}
