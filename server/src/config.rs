//! Server configuration from environment variables.

use larder_core::{CatalogConfig, ConfigError};
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// User id applied to requests that do not send `X-User-Id`.
pub const DEFAULT_USER_ID: &str = "default-user";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL URL. `None` selects the in-memory bookmark store.
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub default_user_id: String,
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `DATABASE_URL`: PostgreSQL URL (optional, blank counts as unset)
    /// - `LARDER_BIND_ADDR`: listen address (default: "0.0.0.0:3000")
    /// - `LARDER_DEFAULT_USER_ID`: fallback user id (default: "default-user")
    /// - catalog settings, see [`CatalogConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty());

        let bind_addr =
            lookup("LARDER_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let default_user_id = match lookup("LARDER_DEFAULT_USER_ID") {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    name: "LARDER_DEFAULT_USER_ID",
                    value: raw,
                })
            }
            Some(raw) => raw.trim().to_string(),
            None => DEFAULT_USER_ID.to_string(),
        };

        Ok(Self {
            database_url,
            bind_addr,
            default_user_id,
            catalog: CatalogConfig::from_lookup(&lookup)?,
        })
    }
}
