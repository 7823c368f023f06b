//! Form state submitted to the quote endpoint.
//!
//! Like a browser form, every field is kept as text and sent as a string after
//! trimming. The server is responsible for interpreting the values.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::i18n::Labels;

/// Editable form fields.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FormField {
    Model,
    Year,
    City,
    Accidents,
    #[strum(serialize = "driver_age", serialize = "driver-age", serialize = "age")]
    DriverAge,
}

/// Raw form values.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteForm {
    pub model: String,
    pub year: String,
    pub city: String,
    pub accidents: String,
    pub driver_age: String,
}

impl QuoteForm {
    /// Replace one field.
    pub fn set(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Model => &mut self.model,
            FormField::Year => &mut self.year,
            FormField::City => &mut self.city,
            FormField::Accidents => &mut self.accidents,
            FormField::DriverAge => &mut self.driver_age,
        };
        *slot = value.to_string();
    }

    /// Payload as it is sent: every value trimmed.
    pub fn payload(&self) -> QuoteForm {
        QuoteForm {
            model: self.model.trim().to_string(),
            year: self.year.trim().to_string(),
            city: self.city.trim().to_string(),
            accidents: self.accidents.trim().to_string(),
            driver_age: self.driver_age.trim().to_string(),
        }
    }

    /// Localized `label: value` lines, with the city placeholder for an empty city.
    pub fn describe(&self, labels: &Labels) -> Vec<String> {
        let city = if self.city.trim().is_empty() {
            labels.city_placeholder
        } else {
            self.city.as_str()
        };
        vec![
            format!("{}: {}", labels.model, self.model),
            format!("{}: {}", labels.year, self.year),
            format!("{}: {}", labels.city, city),
            format!("{}: {}", labels.accidents, self.accidents),
            format!("{}: {}", labels.driver_age, self.driver_age),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use serde_json::json;

    #[test]
    fn field_names_parse() {
        assert_eq!("year".parse::<FormField>().unwrap(), FormField::Year);
        assert_eq!("driver-age".parse::<FormField>().unwrap(), FormField::DriverAge);
        assert_eq!("CITY".parse::<FormField>().unwrap(), FormField::City);
        assert!("colour".parse::<FormField>().is_err());
    }

    #[test]
    fn payload_is_trimmed_strings() {
        let mut form = QuoteForm::default();
        form.set(FormField::Year, " 2015 ");
        form.set(FormField::City, "Riyadh\t");
        form.set(FormField::DriverAge, "40");
        let value = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "",
                "year": "2015",
                "city": "Riyadh",
                "accidents": "",
                "driver_age": "40"
            })
        );
    }

    #[test]
    fn empty_city_shows_placeholder() {
        let lines = QuoteForm::default().describe(Language::En.labels());
        assert_eq!(lines[2], "City: -- Select City --");
    }
}
