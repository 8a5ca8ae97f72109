//! Catalog configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the catalog API key.
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Upstream calls are abandoned after this long and treated as unavailable.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API key. `None` makes every catalog call fail with `NotConfigured`.
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SPOONACULAR_API_KEY`: catalog credential (blank counts as unset)
    /// - `LARDER_CATALOG_BASE_URL`: API base URL (default: "https://api.spoonacular.com")
    /// - `LARDER_CATALOG_TIMEOUT_SECS`: request timeout in seconds (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url =
            lookup("LARDER_CATALOG_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("LARDER_CATALOG_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "LARDER_CATALOG_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CatalogConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_values_are_read() {
        let config = load(&[
            (API_KEY_ENV, " abc123 "),
            ("LARDER_CATALOG_BASE_URL", "http://localhost:8080"),
            ("LARDER_CATALOG_TIMEOUT_SECS", "12"),
        ])
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_blank_api_key_counts_as_unset() {
        let config = load(&[(API_KEY_ENV, "   ")]).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_bad_timeout_rejected() {
        for raw in ["0", "soon", "-1", ""] {
            let err = load(&[("LARDER_CATALOG_TIMEOUT_SECS", raw)]).unwrap_err();
            assert!(
                matches!(
                    &err,
                    ConfigError::InvalidValue { name: "LARDER_CATALOG_TIMEOUT_SECS", value } if value == raw
                ),
                "timeout {raw:?}"
            );
        }
    }
}
