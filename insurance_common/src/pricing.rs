//! Fair price computation.
//!
//! The fair price starts from [`BASE_PRICE`] and is scaled by a sum of risk
//! fractions contributed by vehicle age, accident history, driver age and city.
//! The result is clamped to `[MIN_PRICE, MAX_PRICE]` and rounded to whole SAR.
//!
//! Vehicle age is measured against the wall-clock year at call time, so the
//! same request can price differently on either side of a new year.
//! [`compute_fair_price_at`] takes the year explicitly for reproducible results.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::city::city_risk;
use crate::request::QuoteRequest;

/// Price in SAR before any modifier is applied.
pub const BASE_PRICE: f64 = 900.0;
/// Lower bound of the fair price.
pub const MIN_PRICE: f64 = 600.0;
/// Upper bound of the fair price.
pub const MAX_PRICE: f64 = 3000.0;

const OLD_CAR_AGE: i64 = 10;
const OLD_CAR_RISK: f64 = 0.10;
const VERY_OLD_CAR_AGE: i64 = 20;
const VERY_OLD_CAR_RISK: f64 = 0.20;
const ACCIDENT_RISK: f64 = 0.05;
const YOUNG_DRIVER_AGE: i64 = 25;
const YOUNG_DRIVER_RISK: f64 = 0.15;
const SENIOR_DRIVER_AGE: i64 = 60;
const SENIOR_DRIVER_RISK: f64 = 0.10;

/// Result of pricing a single request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Clamped and rounded fair price in SAR.
    pub fair_price: i64,
    /// Sum of applied risk fractions, before clamping.
    pub modifiers: f64,
}

/// Current calendar year according to the local clock.
pub fn current_year() -> i64 {
    i64::from(Local::now().year())
}

/// Price `request` against the current calendar year.
pub fn compute_fair_price(request: &QuoteRequest) -> PriceQuote {
    compute_fair_price_at(request, current_year())
}

/// Price `request` as if the calendar year were `current_year`.
pub fn compute_fair_price_at(request: &QuoteRequest, current_year: i64) -> PriceQuote {
    let mut modifiers = 0.0;

    let car_age = current_year.saturating_sub(request.manufacture_year(current_year));
    if car_age > OLD_CAR_AGE {
        modifiers += OLD_CAR_RISK;
    }
    if car_age > VERY_OLD_CAR_AGE {
        modifiers += VERY_OLD_CAR_RISK;
    }

    modifiers += request.accident_count() as f64 * ACCIDENT_RISK;

    let driver_age = request.driver_age_or_default();
    if driver_age < YOUNG_DRIVER_AGE {
        modifiers += YOUNG_DRIVER_RISK;
    }
    if driver_age > SENIOR_DRIVER_AGE {
        modifiers += SENIOR_DRIVER_RISK;
    }

    modifiers += city_risk(request.city_name());

    let price = (BASE_PRICE * (1.0 + modifiers)).clamp(MIN_PRICE, MAX_PRICE);

    PriceQuote {
        fair_price: price.round() as i64,
        modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i64 = 2024;

    fn request(year: i64, accidents: i64, driver_age: i64, city: &str) -> QuoteRequest {
        QuoteRequest {
            model: None,
            year: Some(year),
            city: Some(city.to_string()),
            accidents: Some(accidents),
            driver_age: Some(driver_age),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn riyadh_new_car_is_990() {
        let quote = compute_fair_price_at(&request(YEAR, 0, 30, "Riyadh"), YEAR);
        assert_eq!(quote.fair_price, 990);
        assert!(close(quote.modifiers, 0.10));
    }

    #[test]
    fn unknown_city_is_base_price() {
        let quote = compute_fair_price_at(&request(YEAR, 0, 30, "Unknown"), YEAR);
        assert_eq!(quote.fair_price, 900);
        assert_eq!(quote.modifiers, 0.0);
    }

    #[test]
    fn many_accidents_clamp_to_max() {
        let quote = compute_fair_price_at(&request(YEAR, 100, 30, ""), YEAR);
        assert_eq!(quote.fair_price, 3000);
        assert!(close(quote.modifiers, 5.0));
    }

    #[test]
    fn car_age_modifiers_accumulate() {
        let eleven = compute_fair_price_at(&request(YEAR - 11, 0, 30, ""), YEAR);
        assert!(close(eleven.modifiers, 0.10));
        assert_eq!(eleven.fair_price, 990);

        let exactly_ten = compute_fair_price_at(&request(YEAR - 10, 0, 30, ""), YEAR);
        assert_eq!(exactly_ten.modifiers, 0.0);

        let twenty_five = compute_fair_price_at(&request(YEAR - 25, 0, 30, ""), YEAR);
        assert!(close(twenty_five.modifiers, 0.30));
        assert_eq!(twenty_five.fair_price, 1170);
    }

    #[test]
    fn driver_age_bands() {
        let young = compute_fair_price_at(&request(YEAR, 0, 24, ""), YEAR);
        assert!(close(young.modifiers, 0.15));
        let boundary = compute_fair_price_at(&request(YEAR, 0, 25, ""), YEAR);
        assert_eq!(boundary.modifiers, 0.0);
        let senior = compute_fair_price_at(&request(YEAR, 0, 61, ""), YEAR);
        assert!(close(senior.modifiers, 0.10));
        let sixty = compute_fair_price_at(&request(YEAR, 0, 60, ""), YEAR);
        assert_eq!(sixty.modifiers, 0.0);
    }

    #[test]
    fn combined_risks_add_up() {
        // 0.10 + 0.20 (age 22) + 0.10 (2 accidents) + 0.15 (young) + 0.08 (Jeddah)
        let quote = compute_fair_price_at(&request(YEAR - 22, 2, 19, "Jeddah"), YEAR);
        assert!(close(quote.modifiers, 0.63));
        assert_eq!(quote.fair_price, 1467);
    }

    #[test]
    fn accident_modifier_is_monotonic() {
        let mut previous = f64::MIN;
        for accidents in 0..200 {
            let quote = compute_fair_price_at(&request(YEAR, accidents, 30, "Mecca"), YEAR);
            assert!(quote.modifiers >= previous);
            previous = quote.modifiers;
        }
    }

    #[test]
    fn price_always_within_bounds() {
        for year in [0, 1900, 1990, 2010, YEAR, YEAR + 5] {
            for accidents in [0, 1, 5, 40, 1000] {
                for age in [16, 30, 70] {
                    for city in ["Riyadh", "Dammam", "Nowhere"] {
                        let quote =
                            compute_fair_price_at(&request(year, accidents, age, city), YEAR);
                        assert!((600..=3000).contains(&quote.fair_price));
                    }
                }
            }
        }
    }

    #[test]
    fn defaults_price_as_new_car_and_thirty_year_old() {
        let quote = compute_fair_price_at(&QuoteRequest::default(), YEAR);
        assert_eq!(quote.fair_price, 900);
        assert_eq!(quote.modifiers, 0.0);
    }

    #[test]
    fn future_year_has_no_age_risk() {
        let quote = compute_fair_price_at(&request(YEAR + 3, 0, 30, ""), YEAR);
        assert_eq!(quote.fair_price, 900);
    }

    #[test]
    fn wall_clock_variant_matches_explicit_year() {
        let now = current_year();
        let req = request(now - 12, 1, 40, "Dammam");
        assert_eq!(compute_fair_price(&req), compute_fair_price_at(&req, now));
    }
}
