//! Configuration for the users view-model.
//!
//! [`UsersConfig`] carries every tunable the fetch flow reads: the API base
//! URL, the request timeout, the two synthesized avatar URLs and how
//! reachability is probed. It can be built in code or loaded from TOML:
//!
//! ```toml
//! base_url = "https://jsonplaceholder.typicode.com/"
//! request_timeout_ms = 5000
//! thumbnail_url = "https://i.pravatar.cc/150"
//! detail_image_url = "https://i.pravatar.cc/1000"
//!
//! [probe]
//! strategy = "endpoints"
//! endpoint_timeout_ms = 1500
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use userdeck_core::logging::targets;
use userdeck_net::users::DEFAULT_BASE_URL;
use userdeck_net::ProbeStrategy;

/// Default time allowed for the users request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Default per-endpoint connect timeout for [`ProbeMode::Endpoints`].
pub const DEFAULT_ENDPOINT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default list-row avatar URL.
pub const DEFAULT_THUMBNAIL_URL: &str = "https://i.pravatar.cc/150";

/// Default detail-view avatar URL.
pub const DEFAULT_DETAIL_IMAGE_URL: &str = "https://i.pravatar.cc/1000";

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for this schema.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A URL field does not parse.
    #[error("Invalid URL for '{field}': {message}")]
    InvalidUrl { field: &'static str, message: String },

    /// A timeout was configured as zero.
    #[error("Timeout '{0}' must be greater than zero")]
    ZeroTimeout(&'static str),

    /// The HTTP client or users endpoint could not be built from the settings.
    #[error("Failed to set up users client: {0}")]
    Client(#[from] userdeck_net::NetworkError),
}

/// How reachability is decided before and after a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMode {
    /// Interface enumeration only.
    #[default]
    Interfaces,
    /// Interface enumeration followed by TCP connects to well-known hosts.
    Endpoints,
}

/// Reachability probe settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub mode: ProbeMode,
    pub endpoint_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            mode: ProbeMode::Interfaces,
            endpoint_timeout: DEFAULT_ENDPOINT_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    /// The probe strategy these settings describe.
    pub fn strategy(&self) -> ProbeStrategy {
        match self.mode {
            ProbeMode::Interfaces => ProbeStrategy::Interfaces,
            ProbeMode::Endpoints => ProbeStrategy::default_endpoints(self.endpoint_timeout),
        }
    }
}

/// Settings for [`UsersViewModel`](crate::UsersViewModel) and the services it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersConfig {
    /// API base URL; `users` is resolved against it.
    pub base_url: String,
    /// Time allowed for the users request before it is abandoned.
    pub request_timeout: Duration,
    /// Avatar URL attached to every user for list rows.
    pub thumbnail_url: String,
    /// Avatar URL attached to every user for the detail view.
    pub detail_image_url: String,
    pub probe: ProbeConfig,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            thumbnail_url: DEFAULT_THUMBNAIL_URL.to_string(),
            detail_image_url: DEFAULT_DETAIL_IMAGE_URL.to_string(),
            probe: ProbeConfig::default(),
        }
    }
}

impl UsersConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = url.into();
        self
    }

    pub fn with_detail_image_url(mut self, url: impl Into<String>) -> Self {
        self.detail_image_url = url.into();
        self
    }

    pub fn with_probe(mut self, probe: ProbeConfig) -> Self {
        self.probe = probe;
        self
    }

    /// Check that every URL parses and every timeout is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("base_url", &self.base_url)?;
        check_url("thumbnail_url", &self.thumbnail_url)?;
        check_url("detail_image_url", &self.detail_image_url)?;
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("request_timeout"));
        }
        if self.probe.mode == ProbeMode::Endpoints && self.probe.endpoint_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("probe.endpoint_timeout"));
        }
        Ok(())
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        let config = file.into_config();
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|err| ConfigError::InvalidUrl {
            field,
            message: err.to_string(),
        })
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    request_timeout_ms: Option<u64>,
    thumbnail_url: Option<String>,
    detail_image_url: Option<String>,
    #[serde(default)]
    probe: ProbeFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProbeFile {
    strategy: Option<ProbeMode>,
    endpoint_timeout_ms: Option<u64>,
}

impl ConfigFile {
    fn into_config(self) -> UsersConfig {
        let defaults = UsersConfig::default();
        UsersConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            request_timeout: self
                .request_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            thumbnail_url: self.thumbnail_url.unwrap_or(defaults.thumbnail_url),
            detail_image_url: self.detail_image_url.unwrap_or(defaults.detail_image_url),
            probe: ProbeConfig {
                mode: self.probe.strategy.unwrap_or(defaults.probe.mode),
                endpoint_timeout: self
                    .probe
                    .endpoint_timeout_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.probe.endpoint_timeout),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = UsersConfig::default();
        assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com/");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.thumbnail_url, "https://i.pravatar.cc/150");
        assert_eq!(config.detail_image_url, "https://i.pravatar.cc/1000");
        assert_eq!(config.probe.mode, ProbeMode::Interfaces);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = UsersConfig::new()
            .with_base_url("http://localhost:8080")
            .with_request_timeout(Duration::from_millis(250))
            .with_thumbnail_url("http://img/small")
            .with_detail_image_url("http://img/large");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_millis(250));
        assert_eq!(config.thumbnail_url, "http://img/small");
        assert_eq!(config.detail_image_url, "http://img/large");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = UsersConfig::from_toml_str("").unwrap();
        assert_eq!(config, UsersConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = UsersConfig::from_toml_str(
            r#"
            request_timeout_ms = 1200

            [probe]
            strategy = "endpoints"
            endpoint_timeout_ms = 300
            "#,
        )
        .unwrap();
        assert_eq!(config.request_timeout, Duration::from_millis(1200));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.probe.mode, ProbeMode::Endpoints);
        assert_eq!(
            config.probe.strategy(),
            ProbeStrategy::default_endpoints(Duration::from_millis(300))
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = UsersConfig::from_toml_str("timeout = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = UsersConfig::from_toml_str("request_timeout_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout("request_timeout")));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = UsersConfig::new().with_base_url("not a url").validate().unwrap_err();
        match err {
            ConfigError::InvalidUrl { field, .. } => assert_eq!(field, "base_url"),
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://127.0.0.1:9000/api/\"").unwrap();
        let config = UsersConfig::load_toml(file.path()).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = UsersConfig::load_toml(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
