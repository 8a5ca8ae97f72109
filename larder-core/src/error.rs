use thiserror::Error;

/// Failures talking to the upstream recipe catalog.
///
/// Apart from `NotConfigured` and `InvalidUrl`, every variant means the
/// catalog was unavailable for this call.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog API key not configured (set {0})")]
    NotConfigured(&'static str),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    #[error("Catalog request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Catalog returned error status {status}")]
    ApiError {
        status: u16,
        details: Option<serde_json::Value>,
    },

    #[error("Failed to parse catalog response: {0}")]
    ParseError(String),
}

impl CatalogError {
    /// True when the request reached (or tried to reach) the network and failed.
    pub fn is_upstream_unavailable(&self) -> bool {
        !matches!(
            self,
            CatalogError::NotConfigured(_) | CatalogError::InvalidUrl(_)
        )
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Bookmark store unavailable: {0}")]
    Unavailable(String),

    #[error("Bookmark store query failed: {0}")]
    Query(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
