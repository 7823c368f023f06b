//! Command-line arguments for the insurance client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use insurance_common::net::DEFAULT_SERVER_URL;

use crate::i18n::Language;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote server.
    #[clap(long, env = "FAIR_PRICE_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Interface language.
    #[clap(long, value_enum, default_value_t = Language::Ar)]
    pub lang: Language,

    /// Car model.
    #[clap(long, default_value = "")]
    pub model: String,

    /// Year of manufacture.
    #[clap(long, default_value = "")]
    pub year: String,

    /// City where the car is registered (e.g. Riyadh).
    #[clap(long, default_value = "")]
    pub city: String,

    /// Number of recorded accidents.
    #[clap(long, default_value = "")]
    pub accidents: String,

    /// Driver's age.
    #[clap(long, default_value = "")]
    pub driver_age: String,

    /// Submit the form once at startup.
    #[clap(long)]
    pub submit: bool,
}
