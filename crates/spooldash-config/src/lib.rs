//! Configuration loading for the spooldash toolkit.
//!
//! Layered with figment, lowest to highest precedence:
//!
//! 1. compiled defaults ([`Config::default`]),
//! 2. a TOML file at the platform config dir (overridable via
//!    `SPOOLDASH_CONFIG`),
//! 3. the legacy bare `REFRESH_SECONDS` environment variable,
//! 4. `SIMPLYPRINT_*` environment variables.
//!
//! Everything is read once at startup. [`Config::resolve`] validates the
//! merged values into a [`spooldash_core::InventoryConfig`]; the core
//! crates never touch files or the environment themselves.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use spooldash_core::InventoryConfig;

// ── Errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value is absent from every configuration layer.
    #[error("`{field}` is not configured (set the {env} environment variable)")]
    MissingValue {
        field: &'static str,
        env: &'static str,
    },

    /// A value is present but unusable.
    #[error("invalid value for `{field}`: {reason}")]
    Validation { field: String, reason: String },

    /// The file or environment layers failed to merge.
    #[error(transparent)]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config struct ───────────────────────────────────────────────────

/// Merged configuration before validation. Field names double as the
/// TOML keys and (prefixed with `SIMPLYPRINT_`) the env var names.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// SimplyPrint API base URL.
    pub api_base_url: String,

    /// API token, sent as `X-API-KEY`. Required.
    pub api_token: Option<String>,

    /// Company (tenant) id. Required.
    pub api_company_id: Option<String>,

    /// Minimum interval between outbound fetches, in seconds.
    pub refresh_seconds: u64,

    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: spooldash_core::DEFAULT_API_BASE_URL.to_owned(),
            api_token: None,
            api_company_id: None,
            refresh_seconds: spooldash_core::DEFAULT_REFRESH_WINDOW.as_secs(),
            timeout_secs: spooldash_core::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `SPOOLDASH_CONFIG` if set, otherwise
/// the platform config dir per XDG / OS conventions.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("SPOOLDASH_CONFIG") {
        return PathBuf::from(path);
    }
    ProjectDirs::from("io", "spooldash", "spooldash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("spooldash");
            p.push("config.toml");
            p
        })
}

// ── Loading ─────────────────────────────────────────────────────────

impl Config {
    /// Merge all configuration layers. A missing file is fine; a file
    /// that exists but does not parse is an error.
    pub fn load() -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_path()))
            // Legacy env name, kept for compatibility with the old
            // dashboard deployment.
            .merge(Env::raw().only(&["refresh_seconds"]))
            .merge(Env::prefixed("SIMPLYPRINT_"));

        Ok(figment.extract()?)
    }

    /// Validate into the runtime config handed to `InventoryStore`.
    ///
    /// The token is wrapped in a [`SecretString`] here and stays opaque
    /// from this point on.
    pub fn resolve(&self) -> Result<InventoryConfig, ConfigError> {
        let api_token = self
            .api_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingValue {
                field: "api_token",
                env: "SIMPLYPRINT_API_TOKEN",
            })?;

        let company_id = self
            .api_company_id
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(ConfigError::MissingValue {
                field: "api_company_id",
                env: "SIMPLYPRINT_API_COMPANY_ID",
            })?;

        let base_url: url::Url =
            self.api_base_url
                .parse()
                .map_err(|e| ConfigError::Validation {
                    field: "api_base_url".into(),
                    reason: format!("not a valid URL ({e}): {}", self.api_base_url),
                })?;

        // The client only speaks http(s); a mailto:/data: style URL
        // would otherwise surface as a panic deep in URL joining.
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api_base_url".into(),
                reason: format!("URL scheme must be http or https: {}", self.api_base_url),
            });
        }

        Ok(InventoryConfig {
            base_url,
            api_token: SecretString::from(api_token.to_owned()),
            company_id: company_id.to_owned(),
            timeout: Duration::from_secs(self.timeout_secs),
            refresh_window: Duration::from_secs(self.refresh_seconds),
        })
    }
}
