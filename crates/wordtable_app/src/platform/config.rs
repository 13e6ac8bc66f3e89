use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use wordtable_core::{LocaleError, LocaleFormatter, DEFAULT_COUNTER_NAMES};
use wordtable_engine::FetchSettings;
use wordtable_logging::{table_info, table_warn};

use super::logging::LogDestination;
use super::ui::text::Language;

pub const DEFAULT_CONFIG_PATH: &str = "./wordtable.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page_size_options must not be empty")]
    NoPageSizes,
    #[error("page sizes must be positive")]
    ZeroPageSize,
    #[error("initial_page_size {0} is not one of page_size_options")]
    InitialPageSizeNotOffered(usize),
    #[error("request_timeout_secs must be positive")]
    ZeroTimeout,
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Settings file contents. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size_options: Vec<usize>,
    pub initial_page_size: Option<usize>,
    pub number_locale: String,
    pub date_locale: String,
    pub language: Language,
    pub request_timeout_secs: u64,
    pub counter_names: Vec<String>,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/".to_string(),
            page_size_options: vec![10, 25, 50, 100],
            initial_page_size: None,
            number_locale: "ar-IQ".to_string(),
            date_locale: "ckb-IQ".to_string(),
            language: Language::Kurdish,
            request_timeout_secs: 30,
            counter_names: DEFAULT_COUNTER_NAMES.iter().map(|name| name.to_string()).collect(),
            log_destination: LogDestination::File,
        }
    }
}

/// Checked configuration the app runs with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub page_sizes: Vec<NonZeroUsize>,
    pub initial_page_size: NonZeroUsize,
    pub formatter: LocaleFormatter,
    pub fetch: FetchSettings,
    pub language: Language,
    pub counter_names: Vec<String>,
    pub log_destination: LogDestination,
}

/// Where the loaded configuration came from.
///
/// Loading happens before the logger exists, so the outcome is kept and
/// reported once logging is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File,
    Missing,
    Unreadable(String),
    Unparsable(String),
}

impl ConfigOrigin {
    pub fn log(&self, path: &Path) {
        match self {
            ConfigOrigin::File => table_info!("Loaded config from {:?}", path),
            ConfigOrigin::Missing => table_info!("No config at {:?}; using defaults", path),
            ConfigOrigin::Unreadable(err) => {
                table_warn!("Failed to read config from {:?}: {}; using defaults", path, err)
            }
            ConfigOrigin::Unparsable(err) => {
                table_warn!("Failed to parse config from {:?}: {}; using defaults", path, err)
            }
        }
    }
}

/// Reads the config at `path`.
///
/// A missing or unreadable file yields the defaults, as does a file that is
/// not valid RON; the latter two also warn on stderr.
pub fn load_config(path: &Path) -> (AppConfig, ConfigOrigin) {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (AppConfig::default(), ConfigOrigin::Missing);
        }
        Err(err) => {
            eprintln!("Warning: Could not read config at {:?}: {}", path, err);
            return (AppConfig::default(), ConfigOrigin::Unreadable(err.to_string()));
        }
    };

    match ron::from_str(&content) {
        Ok(config) => (config, ConfigOrigin::File),
        Err(err) => {
            eprintln!("Warning: Could not parse config at {:?}: {}", path, err);
            (AppConfig::default(), ConfigOrigin::Unparsable(err.to_string()))
        }
    }
}

impl AppConfig {
    pub fn validate(self) -> Result<Settings, ConfigError> {
        let page_sizes = self
            .page_size_options
            .iter()
            .map(|size| NonZeroUsize::new(*size).ok_or(ConfigError::ZeroPageSize))
            .collect::<Result<Vec<_>, _>>()?;
        let first = *page_sizes.first().ok_or(ConfigError::NoPageSizes)?;
        let initial_page_size = match self.initial_page_size {
            None => first,
            Some(size) => page_sizes
                .iter()
                .copied()
                .find(|offered| offered.get() == size)
                .ok_or(ConfigError::InitialPageSizeNotOffered(size))?,
        };
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let formatter = LocaleFormatter::from_tags(&self.number_locale, &self.date_locale)?;

        Ok(Settings {
            page_sizes,
            initial_page_size,
            formatter,
            fetch: FetchSettings {
                base_url: self.base_url,
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                ..FetchSettings::default()
            },
            language: self.language,
            counter_names: self.counter_names,
            log_destination: self.log_destination,
        })
    }
}
