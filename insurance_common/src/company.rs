//! Insurance companies that produce comparison offers.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Companies quoted for every request.
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
pub enum Company {
    Najm,
    TameenX,
    Aman,
    Wathiq,
    Sanad,
}

/// Offer order. Responses always list companies in exactly this order.
pub const COMPANIES: [Company; 5] = [
    Company::Najm,
    Company::TameenX,
    Company::Aman,
    Company::Wathiq,
    Company::Sanad,
];

impl Company {
    /// Display name of the company.
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
