use crate::error::{Result, SessionError};
use crate::utils::get_env_with_prefix;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shared cookie configuration for both session stores
///
/// The database-backed and cookie-only stores are independent but carry the
/// same cookie attributes and signing secrets.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Cookie name
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Cookie domain (optional)
    #[serde(default)]
    pub cookie_domain: Option<String>,

    /// Cookie path
    #[serde(default = "default_cookie_path")]
    pub cookie_path: String,

    /// Cookie secure flag (HTTPS only)
    ///
    /// Off by default for local development; `from_env` turns it on when
    /// `APP_ENV=production`.
    #[serde(default)]
    pub cookie_secure: bool,

    /// Cookie http_only flag
    #[serde(default = "default_http_only")]
    pub cookie_http_only: bool,

    /// Ordered signing secrets: the first signs new cookies, all of them
    /// verify incoming ones. Rotate by prepending a new secret and keeping
    /// the old one listed until outstanding cookies expire.
    #[serde(default)]
    pub secrets: Vec<String>,

    /// Default session TTL (in seconds) applied when no explicit expiration
    /// is given
    #[serde(default = "default_ttl_seconds")]
    pub default_ttl_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_domain: None,
            cookie_path: default_cookie_path(),
            cookie_secure: false,
            cookie_http_only: default_http_only(),
            secrets: Vec::new(),
            default_ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_SECRET` (required): comma-separated signing secrets
    /// - `APP_ENV`: `production` enables the `Secure` cookie attribute
    /// - `SESSION_COOKIE_NAME`, `SESSION_COOKIE_DOMAIN`,
    ///   `SESSION_TTL_SECONDS`: optional overrides
    ///
    /// # Errors
    ///
    /// Fails at startup when `SESSION_SECRET` is missing or contains no
    /// non-empty secret, rather than at the first request.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        let raw_secrets = get_env_with_prefix("SESSION_SECRET").ok_or_else(|| {
            SessionError::config("SESSION_SECRET is not set (comma-separated signing secrets)")
        })?;
        config.secrets = parse_secret_list(&raw_secrets)?;

        if let Some(env) = get_env_with_prefix("APP_ENV") {
            config.cookie_secure = env.eq_ignore_ascii_case("production");
        }

        if let Some(name) = get_env_with_prefix("SESSION_COOKIE_NAME") {
            config.cookie_name = name;
        }

        if let Some(domain) = get_env_with_prefix("SESSION_COOKIE_DOMAIN") {
            config.cookie_domain = Some(domain);
        }

        if let Some(ttl) = get_env_with_prefix("SESSION_TTL_SECONDS") {
            if let Ok(seconds) = ttl.parse() {
                config.default_ttl_seconds = seconds;
            }
        }

        Ok(config)
    }

    /// Get default TTL as Duration
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_seconds)
    }
}

/// Split a comma-separated secret list, trimming whitespace.
///
/// Empty entries are rejected rather than skipped: a trailing comma in
/// `SESSION_SECRET` is a deployment mistake worth failing loudly on.
pub(crate) fn parse_secret_list(raw: &str) -> Result<Vec<String>> {
    let secrets: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();

    if secrets.iter().any(String::is_empty) {
        return Err(SessionError::config(
            "SESSION_SECRET contains an empty secret",
        ));
    }

    Ok(secrets)
}

fn default_cookie_name() -> String {
    "en_session".to_string()
}

fn default_cookie_path() -> String {
    "/".to_string()
}

fn default_http_only() -> bool {
    true
}

fn default_ttl_seconds() -> u64 {
    // 30 days, matching the application's session expiration policy
    3600 * 24 * 30
}
