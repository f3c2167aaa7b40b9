//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SURVEY_FLOW` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working
//! development setup.
//!
//! # Example
//!
//! ```no_run
//! use survey_flow::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod session;
mod survey;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use session::{SessionConfig, DEVELOPMENT_COOKIE_SECRET};
pub use survey::SurveyConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Visitor session configuration (cookie, expiry)
    #[serde(default)]
    pub session: SessionConfig,

    /// Survey definition source
    #[serde(default)]
    pub survey: SurveyConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SURVEY_FLOW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SURVEY_FLOW__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SURVEY_FLOW__SESSION__COOKIE_SECRET=...` -> `session.cookie_secret = ...`
    /// - `SURVEY_FLOW__SURVEY__DEFINITION_PATH=survey.yaml` -> `survey.definition_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SURVEY_FLOW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.session.validate(&self.server.environment)?;
        self.survey.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
