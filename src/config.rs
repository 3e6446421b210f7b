//! Runtime configuration read from the environment
//!
//! - `IXTAMPA_API_URL`: preview backend base URL (default `http://127.0.0.1:5000`)
//! - `IXTAMPA_ERROR_POLICY`: `log` (default) or `surface`

use thiserror::Error;

use crate::api::DEFAULT_API_BASE_URL;
use crate::state::data::ErrorPolicy;

pub const API_URL_VAR: &str = "IXTAMPA_API_URL";
pub const ERROR_POLICY_VAR: &str = "IXTAMPA_ERROR_POLICY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("IXTAMPA_API_URL must start with http:// or https://, got '{0}'")]
    InvalidApiUrl(String),
    #[error("IXTAMPA_ERROR_POLICY must be 'log' or 'surface', got '{0}'")]
    InvalidErrorPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without a trailing slash
    pub api_base_url: String,
    pub error_policy: ErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment
    ///
    /// Invalid values are logged and replaced by their defaults so the
    /// window still opens.
    pub fn load() -> Self {
        Self::load_from(|key| std::env::var(key).ok())
    }

    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = parse_api_url(lookup(API_URL_VAR)).unwrap_or_else(|err| {
            tracing::warn!(%err, "using default backend URL");
            DEFAULT_API_BASE_URL.to_string()
        });
        let error_policy = parse_error_policy(lookup(ERROR_POLICY_VAR)).unwrap_or_else(|err| {
            tracing::warn!(%err, "using default error policy");
            ErrorPolicy::default()
        });

        Self {
            api_base_url,
            error_policy,
        }
    }
}

fn parse_api_url(value: Option<String>) -> Result<String, ConfigError> {
    let Some(raw) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_API_BASE_URL.to_string());
    };

    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(raw));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

fn parse_error_policy(value: Option<String>) -> Result<ErrorPolicy, ConfigError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(ErrorPolicy::default()),
        Some(v) if v.eq_ignore_ascii_case("log") => Ok(ErrorPolicy::LogOnly),
        Some(v) if v.eq_ignore_ascii_case("surface") => Ok(ErrorPolicy::Surface),
        Some(v) => Err(ConfigError::InvalidErrorPolicy(v.to_string())),
    }
}
