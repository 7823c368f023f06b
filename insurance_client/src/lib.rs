//! Terminal client for the fair insurance quote service.
//!
//! - `args` — command-line interface.
//! - `i18n` — Arabic and English labels.
//! - `form` — form values sent to the server.
//! - `api` — HTTP quote service.
//! - `view` — explicit display state: language, offers, sort and filter.
//! - `render` — plain-text screens.
//! - `command` — prompt commands.
//! - `session` — ties form, view and service together.
#![warn(missing_docs)]
pub mod args;
pub mod i18n;
pub mod form;
pub mod api;
pub mod view;
pub mod render;
pub mod command;
pub mod session;
