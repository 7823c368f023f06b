//! Display state of the offers table.
//!
//! `ViewState` owns everything the table needs: the interface language, the last
//! fetched offers, the sort column and direction, and the filter text. Rows are
//! derived from it on demand, so the state can be tested without any terminal.
//!
//! Rules:
//! - The filter is a case-insensitive substring match on the company name.
//! - Sorting is stable; selecting the current column flips the direction, selecting
//!   another column sorts it ascending.
//! - Every visible row carrying the minimum visible price is marked cheapest.
//! - A successful fetch replaces the offers and resets sorting to price ascending.

use std::cmp::Ordering;

use insurance_common::offers::{Offer, lowest_price};
use strum_macros::{Display, EnumString};

use crate::i18n::{Labels, Language};

/// Sortable table columns.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    Company,
    Price,
}

/// Sort direction.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Column the rows are ordered by.
    pub key: SortKey,
    /// Order of that column.
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Price,
            direction: SortDirection::Ascending,
        }
    }
}

/// A table row ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<'a> {
    /// Offer shown in this row.
    pub offer: &'a Offer,
    /// Whether this row has the lowest visible price.
    pub cheapest: bool,
}

/// Complete display state of the client.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    language: Language,
    offers: Vec<Offer>,
    sort: SortState,
    filter: String,
    results_visible: bool,
    submitting: bool,
}

impl ViewState {
    /// Fresh state in `language`, with no results.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Current language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Labels of the current language.
    pub fn labels(&self) -> &'static Labels {
        self.language.labels()
    }

    /// Switch language. Offers are kept; only labels change.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Current sort.
    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Current filter text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Replace the filter text.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
    }

    /// Whether results have been fetched at least once.
    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// All offers of the last successful fetch, unfiltered.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Column header click: flip direction on the active column, otherwise
    /// switch to `key` ascending.
    pub fn click_header(&mut self, key: SortKey) {
        if self.sort.key == key {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = SortState {
                key,
                direction: SortDirection::Ascending,
            };
        }
    }

    /// Install freshly fetched offers.
    pub fn replace_offers(&mut self, offers: Vec<Offer>) {
        self.offers = offers;
        self.sort = SortState::default();
        self.results_visible = true;
    }

    /// Mark a request as in flight.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    /// Mark the in-flight request as finished, whatever its outcome.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Whether a request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Text of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            self.labels().calculating
        } else {
            self.labels().btn_calc
        }
    }

    /// Filtered, sorted rows with the cheapest ones flagged.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let needle = self.filter.to_lowercase();
        let mut visible: Vec<&Offer> = self
            .offers
            .iter()
            .filter(|offer| offer.company.name().to_lowercase().contains(&needle))
            .collect();

        let sort = self.sort;
        visible.sort_by(|a, b| {
            let ordering = compare(a, b, sort.key);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let min_price = lowest_price(visible.iter().copied());
        visible
            .into_iter()
            .map(|offer| Row {
                offer,
                cheapest: Some(offer.price) == min_price,
            })
            .collect()
    }
}

fn compare(a: &Offer, b: &Offer, key: SortKey) -> Ordering {
    match key {
        SortKey::Company => a.company.name().cmp(b.company.name()),
        SortKey::Price => a.price.cmp(&b.price),
    }
}
