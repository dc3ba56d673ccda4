//! Client configuration
//!
//! Every field has a default, so an embedding application can deserialize a
//! partial table (e.g. a `[zxart]` section of its TOML config) into
//! [`ClientConfig`].

use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{Language, Sorting};
use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://zxart.ee/api/";
pub const DEFAULT_LIMIT: u32 = 60;
pub const DEFAULT_USER_AGENT: &str = concat!("zxart-rs/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Defaults applied to every request plus transport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root; request segments are appended to its path
    pub base_url: Url,
    pub language: Language,
    /// Page size used when a request does not set `limit`
    pub limit: u32,
    pub sorting: Sorting,
    pub user_agent: String,
    /// Transport timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            language: Language::default(),
            limit: DEFAULT_LIMIT,
            sorting: Sorting::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointing at another API root
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        let config = Self {
            base_url,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL {} cannot take path segments",
                self.base_url
            )));
        }
        if self.limit == 0 {
            return Err(Error::Config("limit must be greater than zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "https://zxart.ee/api/");
        assert_eq!(config.language, Language::Russian);
        assert_eq!(config.limit, 60);
        assert_eq!(config.sorting, Sorting::MOST_RECENT);
        assert_eq!(config.timeout_secs, Some(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:8080/api/").unwrap();
        assert_eq!(config.base_url.port(), Some(8080));
        assert_eq!(config.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(matches!(
            ClientConfig::with_base_url("mailto:someone@example.com"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            ClientConfig::with_base_url("not a url"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_rejects_zero_limit() {
        let config = ClientConfig {
            limit: 0,
            ..ClientConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
