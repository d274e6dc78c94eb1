//! Configuration loading and constants.
//!
//! Configuration is resolved once at startup from three layers: built-in
//! defaults, an optional TOML file, then environment variables (`PORT`,
//! `NODE_ENV`, `APP_VERSION`). The resolved `AppConfig` is
//! passed into the router explicitly; handlers never read the environment.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::num::ParseIntError;
use std::path::Path;

// =============================================================================
// Defaults
// =============================================================================

/// Listening port when neither the config file nor `PORT` sets one
pub const DEFAULT_PORT: u16 = 3000;

/// Bind to all interfaces
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Reported environment name when `NODE_ENV` is unset
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Reported version when `APP_VERSION` is unset
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Cache-Control for the JSON endpoints; every body is computed per request
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "devops_studio_app=info,tower_http=info";

/// Always appended to the log filter so the startup lines survive a
/// quieter `RUST_LOG`
pub const STARTUP_LOG_DIRECTIVE: &str = "devops_studio_app::http::server=info";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_ENVIRONMENT: &str = "NODE_ENV";
pub const ENV_APP_VERSION: &str = "APP_VERSION";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Values reported by the JSON endpoints
    #[serde(default)]
    pub app: AppInfoConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: IpAddr,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> IpAddr {
        DEFAULT_HOST
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Environment name and version reported to clients
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppInfoConfig {
    #[serde(default = "AppInfoConfig::default_environment")]
    pub environment: String,
    #[serde(default = "AppInfoConfig::default_version")]
    pub version: String,
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        Self {
            environment: Self::default_environment(),
            version: Self::default_version(),
        }
    }
}

impl AppInfoConfig {
    fn default_environment() -> String {
        DEFAULT_ENVIRONMENT.to_string()
    }

    fn default_version() -> String {
        DEFAULT_APP_VERSION.to_string()
    }
}

/// Build the tracing filter from the operator's directives, keeping the
/// startup lines at `info` regardless of what those directives say.
pub fn log_filter_directives(base: &str) -> String {
    let base = base.trim().trim_end_matches(',');
    if base.is_empty() {
        STARTUP_LOG_DIRECTIVE.to_string()
    } else {
        format!("{base},{STARTUP_LOG_DIRECTIVE}")
    }
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then apply
    /// overrides from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read a TOML config file. Every section and field is optional.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Resolve a config from defaults plus the given lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_overrides(lookup)
    }

    /// Apply environment-style overrides. Unset and empty values leave the
    /// current setting in place.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(port) = resolve(ENV_PORT) {
            self.http.port = port.trim().parse().map_err(|source| ConfigError::InvalidPort {
                value: port.clone(),
                source,
            })?;
        }
        if let Some(environment) = resolve(ENV_ENVIRONMENT) {
            self.app.environment = environment;
        }
        if let Some(version) = resolve(ENV_APP_VERSION) {
            self.app.version = version;
        }

        Ok(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid PORT value \"{value}\": {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
