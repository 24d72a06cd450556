use log::LevelFilter;
use your_energy_domain as domain;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub suggestion_limit: usize,
    pub search_page_limit: u32,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        let config = domain::CatalogConfig::default();
        Self {
            suggestion_limit: config.suggestion_limit,
            search_page_limit: config.page_limit,
            log_level: LogLevel::Info,
        }
    }
}

impl From<&Settings> for domain::CatalogConfig {
    fn from(value: &Settings) -> Self {
        Self {
            suggestion_limit: value.suggestion_limit,
            page_limit: value.search_page_limit.max(1),
            ..Self::default()
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
