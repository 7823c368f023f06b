//! Plain-text rendering of the client screens.
//!
//! Arabic screens start every line with a right-to-left mark so terminals with
//! bidi support lay them out right to left.
use crate::form::QuoteForm;
use crate::i18n::Language;
use crate::view::{SortDirection, SortKey, ViewState};

/// Marker placed in front of the cheapest rows.
pub const CHEAPEST_MARKER: &str = "*";

/// U+200F RIGHT-TO-LEFT MARK.
pub const RTL_MARK: char = '\u{200F}';

/// Format a price with `en-US` thousands separators, e.g. `1,234`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if price < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Line-oriented text buffer aware of the writing direction.
struct Screen {
    text: String,
    rtl: bool,
}

impl Screen {
    fn new(language: Language) -> Self {
        Self {
            text: String::new(),
            rtl: language.is_rtl(),
        }
    }

    fn line(&mut self, content: &str) {
        if self.rtl {
            self.text.push(RTL_MARK);
        }
        self.text.push_str(content);
        self.text.push('\n');
    }

    fn finish(self) -> String {
        self.text
    }
}

/// A single status line, e.g. the in-flight label or an alert.
pub fn render_notice(state: &ViewState, text: &str) -> String {
    let mut screen = Screen::new(state.language());
    screen.line(text);
    screen.finish()
}

/// Title, form values and submit control.
pub fn render_form(state: &ViewState, form: &QuoteForm) -> String {
    let labels = state.labels();
    let mut screen = Screen::new(state.language());
    screen.line(labels.title);
    screen.line(&format!("{}: {}", labels.select_language, state.language()));
    for line in form.describe(labels) {
        screen.line(&format!("  {}", line));
    }
    screen.line(&format!("[{}]", state.submit_label()));
    screen.finish()
}

/// Offers table with sort indicator and cheapest marker. Empty until the first
/// successful fetch.
pub fn render_table(state: &ViewState) -> String {
    if !state.results_visible() {
        return String::new();
    }

    let labels = state.labels();
    let sort = state.sort();
    let arrow = match sort.direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    };
    let company_header = header(labels.table_company, sort.key == SortKey::Company, arrow);
    let price_header = header(labels.table_price, sort.key == SortKey::Price, arrow);

    let mut screen = Screen::new(state.language());
    screen.line(labels.result_title);
    screen.line(&format!("{} {}", labels.filter_label, state.filter()));
    screen.line(&format!("  {:<20} {:>14}", company_header, price_header));
    for row in state.rows() {
        let marker = if row.cheapest { CHEAPEST_MARKER } else { " " };
        screen.line(&format!(
            "{} {:<20} {:>14}",
            marker,
            row.offer.company.name(),
            format_price(row.offer.price)
        ));
    }
    screen.finish()
}

fn header(label: &str, active: bool, arrow: &str) -> String {
    if active {
        format!("{} {}", label, arrow)
    } else {
        label.to_string()
    }
}
