//! Visitor session configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Signing key used when none is configured. Rejected in production.
pub const DEVELOPMENT_COOKIE_SECRET: &str = "survey-flow-development-cookie-secret-do-not-use";

/// Minimum cookie secret length in bytes
const MIN_SECRET_LEN: usize = 32;

/// Visitor session configuration (cookie and in-memory store)
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the visitor cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// HMAC key for signing visitor cookies
    #[serde(default = "default_cookie_secret")]
    pub cookie_secret: String,

    /// Seconds of inactivity after which a session is discarded
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Seconds between sweeps of expired sessions
    #[serde(default = "default_purge_interval")]
    pub purge_interval_secs: u64,

    /// Mark the cookie `Secure` (HTTPS only)
    #[serde(default)]
    pub secure_cookie: bool,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.cookie_name.is_empty()
            || !self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::InvalidCookieName);
        }
        if self.cookie_secret.len() < MIN_SECRET_LEN {
            return Err(ValidationError::CookieSecretTooShort(MIN_SECRET_LEN));
        }
        if self.idle_timeout_secs == 0 || self.purge_interval_secs == 0 {
            return Err(ValidationError::InvalidSessionTimeout);
        }
        if *environment == Environment::Production {
            if self.cookie_secret == DEVELOPMENT_COOKIE_SECRET {
                return Err(ValidationError::MissingRequired("SESSION__COOKIE_SECRET"));
            }
            if !self.secure_cookie {
                return Err(ValidationError::CookieMustBeSecure);
            }
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_secret: default_cookie_secret(),
            idle_timeout_secs: default_idle_timeout(),
            purge_interval_secs: default_purge_interval(),
            secure_cookie: false,
        }
    }
}

fn default_cookie_name() -> String {
    "survey_session".to_string()
}

fn default_cookie_secret() -> String {
    DEVELOPMENT_COOKIE_SECRET.to_string()
}

fn default_idle_timeout() -> u64 {
    3600
}

fn default_purge_interval() -> u64 {
    300
}
