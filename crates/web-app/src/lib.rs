#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;

mod service;
mod settings;
mod suggestion;

pub use service::Service;
pub use settings::{LogLevel, Settings, SettingsRepository, SettingsService};
pub use suggestion::{SuggestionDebouncer, suggestion_delay};
