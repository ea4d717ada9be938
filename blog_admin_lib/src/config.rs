//! Client configuration read from the process environment.
//!
//! The binary loads `.env` once at startup; everything here only reads
//! variables, so tests can drive it through [`from_lookup`].

use std::time::Duration;

use blog_api::ClientConfig;

use crate::error::BlogAdminError;

/// API base URL, e.g. `https://blog.example.com/api`.
pub const BASE_URL_VAR: &str = "BLOG_API_BASE";
/// Optional request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "BLOG_API_TIMEOUT_SECS";

/// Builds the client configuration from the process environment.
pub fn from_env() -> Result<ClientConfig, BlogAdminError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Builds the client configuration from an arbitrary variable source.
pub fn from_lookup<F>(lookup: F) -> Result<ClientConfig, BlogAdminError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = lookup(BASE_URL_VAR)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BlogAdminError::Config(format!("{} is not set", BASE_URL_VAR)))?;

    let mut config = ClientConfig::parse(&base)
        .map_err(|e| BlogAdminError::Config(format!("{}: {}", BASE_URL_VAR, e)))?;

    if let Some(raw) = lookup(TIMEOUT_VAR) {
        let secs = raw.trim().parse::<u64>().map_err(|_| {
            BlogAdminError::Config(format!(
                "{} must be a whole number of seconds, got '{}'",
                TIMEOUT_VAR, raw
            ))
        })?;
        if secs > 0 {
            config = config.with_timeout(Duration::from_secs(secs));
        }
    }

    tracing::debug!("API base URL: {}", config.base_url);
    Ok(config)
}
