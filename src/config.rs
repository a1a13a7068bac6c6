//! Frontend Configuration
//!
//! Defaults can be overridden at build time:
//! `CACHE_API_BASE=http://127.0.0.1:19970 CACHE_LOG=debug trunk build`

use log::LevelFilter;
use std::sync::OnceLock;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 250;
pub const DEFAULT_NOTICE_MS: u32 = 2500;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix for every backend path; empty means same origin
    pub api_base: String,
    pub search_debounce_ms: u32,
    /// How long a notice toast stays visible
    pub notice_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            notice_ms: DEFAULT_NOTICE_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    fn from_build_env() -> Self {
        Self::from_values(option_env!("CACHE_API_BASE"), option_env!("CACHE_LOG"))
    }

    fn from_values(api_base: Option<&str>, log: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(level) = log.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}

/// Process-wide configuration, resolved once
pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(Config::from_build_env)
}
