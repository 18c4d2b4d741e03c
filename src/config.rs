//! Application Configuration
//!
//! Built once in `main` and handed to `App`; nothing here is global state.

use log::LevelFilter;

use crate::nav::SidebarConfig;

/// Backend used when `CRM_API_URL` was not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,
    pub sidebar: SidebarConfig,
    /// Most verbose level kept by the logger
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        Self {
            api_base_url: if trimmed.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                trimmed.to_string()
            },
            sidebar: SidebarConfig::default(),
            log_level: LevelFilter::Info,
        }
    }

    /// Reads `CRM_API_URL` and `CRM_LOG_LEVEL` as baked in at compile time
    pub fn from_env() -> Self {
        let mut config = Self::new(option_env!("CRM_API_URL").unwrap_or(DEFAULT_API_URL));
        config.log_level = parse_log_level(option_env!("CRM_LOG_LEVEL"));
        config
    }
}

/// `debug`, `warn`, ... ; unset or unknown values mean `info`
fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(AppConfig::new("https://crm.example.com/api/").api_base_url, "https://crm.example.com/api");
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        assert_eq!(AppConfig::new("  ").api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::new(DEFAULT_API_URL);
        assert_eq!(config.sidebar, SidebarConfig::default());
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_log_level(None), LevelFilter::Info);
    }
}
