//! Company offers derived from a fair price.
//!
//! Each company in [`COMPANIES`] quotes the fair price scaled by its own random
//! modifier drawn uniformly from `[MODIFIER_MIN, MODIFIER_MAX)`. Offer prices
//! are not clamped and may fall outside the fair price bounds.
//!
//! Randomness comes from a [`ModifierSource`], so callers can swap the
//! thread-local RNG for a seeded or fixed source.

use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use crate::company::{COMPANIES, Company};

/// Smallest modifier a company may apply (inclusive).
pub const MODIFIER_MIN: f64 = -0.12;
/// Largest modifier a company may apply (exclusive).
pub const MODIFIER_MAX: f64 = 0.18;

/// Supplies one modifier per offer.
pub trait ModifierSource {
    /// Next modifier, expected to lie in `[MODIFIER_MIN, MODIFIER_MAX)`.
    fn next_modifier(&mut self) -> f64;
}

/// Uniform modifiers backed by any `rand` generator.
pub struct RandomModifiers<R> {
    rng: R,
}

impl<R: Rng> RandomModifiers<R> {
    /// Wrap an existing generator, e.g. a seeded `StdRng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomModifiers<ThreadRng> {
    /// Modifiers drawn from the thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> ModifierSource for RandomModifiers<R> {
    fn next_modifier(&mut self) -> f64 {
        self.rng.random_range(MODIFIER_MIN..MODIFIER_MAX)
    }
}

/// Always yields the same modifier.
#[derive(Debug, Clone, Copy)]
pub struct FixedModifier(pub f64);

impl ModifierSource for FixedModifier {
    fn next_modifier(&mut self) -> f64 {
        self.0
    }
}

/// A single company's offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Quoting company.
    pub company: Company,
    /// Applied modifier, rounded to three decimals.
    pub modifier: f64,
    /// Offered price in SAR.
    pub price: i64,
}

impl Offer {
    /// Price an offer for `company` from `fair_price` and the raw `modifier`.
    ///
    /// The price uses the unrounded modifier; only the stored modifier is
    /// rounded for display. Rounding never lifts it to `MODIFIER_MAX`.
    pub fn new(company: Company, fair_price: i64, modifier: f64) -> Self {
        Offer {
            company,
            modifier: round_to_thousandths(modifier).min(MODIFIER_MAX - 0.001),
            price: (fair_price as f64 * (1.0 + modifier)).round() as i64,
        }
    }
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Generate one offer per company, in [`COMPANIES`] order.
pub fn generate_offers<S>(fair_price: i64, source: &mut S) -> Vec<Offer>
where
    S: ModifierSource + ?Sized,
{
    COMPANIES
        .iter()
        .map(|company| Offer::new(*company, fair_price, source.next_modifier()))
        .collect()
}

/// Lowest price among `offers`, `None` when there are none.
pub fn lowest_price<'a, I>(offers: I) -> Option<i64>
where
    I: IntoIterator<Item = &'a Offer>,
{
    offers.into_iter().map(|offer| offer.price).min()
}
