//! Configuration for the content core.
//!
//! [`SiteConfig`] says where the remote content tables live and how
//! listings are paged. Every section has working defaults; with no remote
//! configured, all listings are served from the built-in fallback records.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SiteError};

/// Environment variable overriding [`RemoteConfig::url`].
pub const ENV_REMOTE_URL: &str = "CIKADU_SUPABASE_URL";
/// Environment variable overriding [`RemoteConfig::anon_key`].
pub const ENV_REMOTE_KEY: &str = "CIKADU_SUPABASE_ANON_KEY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Remote content source settings.
    pub remote: RemoteConfig,
    /// Listing presentation settings.
    pub listing: ListingConfig,
}

/// Remote REST content source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`. `None` = unconfigured.
    pub url: Option<String>,
    /// Public (anon) API key sent with every request.
    pub anon_key: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            timeout_seconds: 8,
        }
    }
}

impl RemoteConfig {
    /// Whether both the URL and the key are present and non-empty.
    pub fn is_configured(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.url) && filled(&self.anon_key)
    }
}

/// Listing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Records revealed per "load more" step.
    pub page_size: usize,
    /// Related articles shown under an article.
    pub related_count: usize,
    /// Remote table holding news articles.
    pub news_table: String,
    /// Remote table holding businesses.
    pub business_table: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 6,
            related_count: 3,
            news_table: "news".to_owned(),
            business_table: "businesses".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| SiteError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SiteError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/cikadu/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("cikadu").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("cikadu")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/cikadu-config/config.toml")
        }
    }

    /// Apply `CIKADU_SUPABASE_URL` / `CIKADU_SUPABASE_ANON_KEY` if set.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply remote overrides from an arbitrary variable lookup.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_REMOTE_URL) {
            self.remote.url = Some(url);
        }
        if let Some(key) = lookup(ENV_REMOTE_KEY) {
            self.remote.anon_key = Some(key);
        }
        self
    }

    /// Validates this configuration.
    ///
    /// Checks:
    /// - `listing.page_size` must be greater than 0
    /// - `remote.timeout_seconds` must be greater than 0
    /// - `remote.url`, when set, must be an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.listing.page_size == 0 {
            return Err(SiteError::Config(
                "page_size must be greater than 0".into(),
            ));
        }
        if self.remote.timeout_seconds == 0 {
            return Err(SiteError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if let Some(ref raw) = self.remote.url {
            let parsed = url::Url::parse(raw)
                .map_err(|e| SiteError::Config(format!("remote url is invalid: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(SiteError::Config(
                    "remote url must use http or https".into(),
                ));
            }
        }
        Ok(())
    }
}
