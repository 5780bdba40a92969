//! Build-Time Configuration
//!
//! Values are baked in from the environment when the WASM bundle is built.

use std::str::FromStr;

use log::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_NOTICE_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for backend endpoints, empty for same origin
    pub api_base: String,
    pub log_level: LevelFilter,
    /// How long a notice stays on screen
    pub notice_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
            notice_ms: DEFAULT_NOTICE_MS,
        }
    }
}

impl AppConfig {
    /// Read `RECIPE_API_BASE`, `RECIPE_LOG_LEVEL` and `RECIPE_NOTICE_MS`
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("RECIPE_API_BASE"),
            option_env!("RECIPE_LOG_LEVEL"),
            option_env!("RECIPE_NOTICE_MS"),
        )
    }

    fn from_values(api_base: Option<&str>, log_level: Option<&str>, notice_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            log_level: log_level
                .and_then(|level| LevelFilter::from_str(level.trim()).ok())
                .unwrap_or(defaults.log_level),
            notice_ms: notice_ms
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.notice_ms),
        }
    }
}
