//! Client configuration parsed from environment variables.
//!
//! `main` loads an optional `.env` file first, then command-line flags
//! override what the environment provides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while building [`AdminConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A base URL was not an `http://` or `https://` URL.
    #[error("invalid base URL for {var}: {value}")]
    InvalidBaseUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Base URL of the profiles REST API, without trailing slash.
    pub api_base_url: String,
    /// Base URL of the admin web UI used to resolve add/edit routes.
    /// When absent, routes are shown as bare paths.
    pub admin_base_url: Option<String>,
    pub timeouts: ApiTimeouts,
}

impl AdminConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PROFILE_API_BASE_URL`: default `http://127.0.0.1:5000`
    /// - `PROFILE_ADMIN_BASE_URL`: unset means bare route paths
    /// - `PROFILE_API_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PROFILE_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if a base URL is set but is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AdminConfig::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`AdminConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = match non_empty("PROFILE_API_BASE_URL") {
            Some(raw) => normalize_base_url("PROFILE_API_BASE_URL", &raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let admin_base_url = non_empty("PROFILE_ADMIN_BASE_URL")
            .map(|raw| normalize_base_url("PROFILE_ADMIN_BASE_URL", &raw))
            .transpose()?;
        let timeouts = ApiTimeouts {
            request_secs: parse_u64_or(
                non_empty("PROFILE_API_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_u64_or(
                non_empty("PROFILE_API_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        };

        Ok(Self { api_base_url, admin_base_url, timeouts })
    }

    /// Apply command-line overrides on top of the environment values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] for a malformed flag value.
    pub fn with_overrides(
        mut self,
        api_base_url: Option<&str>,
        admin_base_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = api_base_url {
            self.api_base_url = normalize_base_url("--base-url", raw)?;
        }
        if let Some(raw) = admin_base_url {
            self.admin_base_url = Some(normalize_base_url("--admin-url", raw)?);
        }
        Ok(self)
    }
}

fn parse_u64_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn normalize_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidBaseUrl { var, value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}
