//! Interface text in the two supported languages.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[clap(rename_all = "lower")]
pub enum Language {
    /// Arabic, right-to-left.
    #[default]
    Ar,
    /// English.
    En,
}

/// Every user-visible label.
#[allow(missing_docs)]
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub model: &'static str,
    pub year: &'static str,
    pub city: &'static str,
    pub accidents: &'static str,
    pub driver_age: &'static str,
    pub btn_calc: &'static str,
    pub calculating: &'static str,
    pub result_title: &'static str,
    pub filter_label: &'static str,
    pub table_company: &'static str,
    pub table_price: &'static str,
    pub city_placeholder: &'static str,
    pub select_language: &'static str,
    pub connection_error: &'static str,
}

static AR: Labels = Labels {
    title: "حاسبة السعر العادل لتأمين السيارات",
    model: "موديل السيارة",
    year: "سنة الصنع",
    city: "المدينة",
    accidents: "عدد الحوادث المسجلة",
    driver_age: "عمر السائق",
    btn_calc: "احسب السعر",
    calculating: "جاري الحساب...",
    result_title: "نتائج العروض",
    filter_label: "بحث عن شركة:",
    table_company: "الشركة",
    table_price: "السعر (ريال)",
    city_placeholder: "-- اختر المدينة --",
    select_language: "اللغة",
    connection_error: "حدث خطأ أثناء الاتصال بالخادم",
};

static EN: Labels = Labels {
    title: "Fair Car Insurance Price Calculator",
    model: "Car Model",
    year: "Year of Manufacture",
    city: "City",
    accidents: "Number of Recorded Accidents",
    driver_age: "Driver's Age",
    btn_calc: "Calculate Price",
    calculating: "Calculating...",
    result_title: "Offers Results",
    filter_label: "Search Company:",
    table_company: "Company",
    table_price: "Price (SAR)",
    city_placeholder: "-- Select City --",
    select_language: "Language",
    connection_error: "An error occurred while contacting the server",
};

impl Language {
    /// Labels for this language.
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::Ar => &AR,
            Language::En => &EN,
        }
    }

    /// Whether text runs right-to-left.
    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }
}
