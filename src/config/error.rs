//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid cookie name")]
    InvalidCookieName,

    #[error("Cookie secret must be at least {0} bytes")]
    CookieSecretTooShort(usize),

    #[error("Session cookie must be Secure in production")]
    CookieMustBeSecure,

    #[error("Session idle timeout and purge interval must be positive")]
    InvalidSessionTimeout,

    #[error("Survey definition not found: {0}")]
    SurveyDefinitionNotFound(PathBuf),
}
