//! Configuration module
//!
//! Settings are read from a TOML file (default:
//! `~/.config/storefront-pager/config.toml`). Every section is optional;
//! missing keys fall back to their defaults.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [pagination]
//! max_visible_narrow = 5
//! max_visible_wide = 7
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::pagination::WindowPolicy;
use crate::shared::types::ConfigError;

/// Upper bound for `edge_threshold` and `edge_fill`.
pub const MAX_EDGE_SETTING: u32 = 100;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";

/// Default config location under the platform config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storefront-pager")
        .join("config.toml")
}

/// Root application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds allowed for in-flight requests to drain on shutdown
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

/// Pagination bar and list-size settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page slots shown below `narrow_breakpoint_px`
    pub max_visible_narrow: u32,
    /// Page slots shown at or above `narrow_breakpoint_px`
    pub max_visible_wide: u32,
    pub narrow_breakpoint_px: u32,
    /// Pages from either end at which the contiguous band is widened
    pub edge_threshold: u32,
    /// Extra pages added next to an end when widening
    pub edge_fill: u32,
    pub default_limit: u32,
    pub max_limit: u32,
}

impl PaginationConfig {
    pub fn window_policy(&self) -> WindowPolicy {
        WindowPolicy::new(self.edge_threshold, self.edge_fill)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        let policy = WindowPolicy::default();
        Self {
            max_visible_narrow: 5,
            max_visible_wide: 7,
            narrow_breakpoint_px: 640,
            edge_threshold: policy.edge_threshold,
            edge_fill: policy.edge_fill,
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `storefront_pager=debug`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config path: explicit value, then `STOREFRONT_CONFIG`, then the default.
    pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(default_config_path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pagination;
        if p.max_visible_narrow == 0 || p.max_visible_wide == 0 {
            return Err(ConfigError::Invalid(
                "pagination.max_visible_* must be at least 1".into(),
            ));
        }
        if p.default_limit == 0 || p.max_limit == 0 {
            return Err(ConfigError::Invalid(
                "pagination limits must be at least 1".into(),
            ));
        }
        if p.edge_threshold > MAX_EDGE_SETTING || p.edge_fill > MAX_EDGE_SETTING {
            return Err(ConfigError::Invalid(format!(
                "pagination.edge_threshold and pagination.edge_fill must not exceed {}",
                MAX_EDGE_SETTING
            )));
        }
        if p.default_limit > p.max_limit {
            return Err(ConfigError::Invalid(format!(
                "pagination.default_limit ({}) exceeds pagination.max_limit ({})",
                p.default_limit, p.max_limit
            )));
        }
        Ok(())
    }
}
