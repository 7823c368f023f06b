//! Known cities and their risk modifiers.
//!
//! The risk table is an ordered static mapping. Lookup by name is an exact,
//! case-sensitive match: `"riyadh"` is not `Riyadh` and contributes nothing.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Cities with a dedicated risk modifier.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Hash,
    Eq,
    PartialEq,
)]
pub enum City {
    Riyadh,
    Jeddah,
    Dammam,
    Mecca,
    Medina,
}

/// Risk fraction added to the price modifiers for each known city.
pub const CITY_RISK: [(City, f64); 5] = [
    (City::Riyadh, 0.10),
    (City::Jeddah, 0.08),
    (City::Dammam, 0.05),
    (City::Mecca, 0.07),
    (City::Medina, 0.06),
];

impl City {
    /// Resolve a city by its exact name.
    pub fn lookup(name: &str) -> Option<City> {
        name.parse().ok()
    }

    /// Risk fraction of this city.
    pub fn risk(self) -> f64 {
        CITY_RISK
            .iter()
            .find(|(city, _)| *city == self)
            .map(|(_, risk)| *risk)
            .unwrap_or(0.0)
    }
}

/// Risk fraction for a free-text city name; unknown or empty names yield `0.0`.
pub fn city_risk(name: &str) -> f64 {
    City::lookup(name).map(City::risk).unwrap_or(0.0)
}
