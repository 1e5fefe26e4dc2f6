// ============================================================================
// CONFIG - Compile-time application configuration
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub analytics_id: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            analytics_id: None,
        }
    }
}

impl AppConfig {
    /// Reads the configuration baked in at compile time (see build.rs).
    pub fn from_env() -> Self {
        Self {
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            analytics_id: normalize_id(option_env!("ANALYTICS_ID")),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// The analytics measurement id, when the integration is enabled.
    pub fn analytics_id(&self) -> Option<&str> {
        self.analytics_id.as_deref()
    }
}

/// An unset or blank id disables analytics; it is not an error.
fn normalize_id(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_analytics_disabled() {
        let config = AppConfig::default();
        assert!(config.is_logging_enabled());
        assert_eq!(config.analytics_id(), None);
    }

    #[test]
    fn blank_or_missing_id_disables_analytics() {
        assert_eq!(normalize_id(None), None);
        assert_eq!(normalize_id(Some("")), None);
        assert_eq!(normalize_id(Some("   ")), None);
        assert_eq!(normalize_id(Some("G-ABC123")), Some("G-ABC123".to_string()));
    }
}
