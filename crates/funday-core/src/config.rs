//! Environment-based configuration.
//!
//! The service is configured entirely through environment variables so it
//! can run unchanged on any host. Provider credentials are optional at
//! startup; endpoints that need a missing credential report a
//! configuration error at request time, before any network call.

use crate::error::ConfigError;

/// Environment variable holding the Google Places API key.
pub const PLACES_API_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";
/// Environment variable holding the Anthropic API key.
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
/// Environment variable overriding the bind address.
pub const BIND_ADDR_VAR: &str = "FUNDAY_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Places API key, if configured.
    pub places_api_key: Option<String>,
    /// Anthropic API key, if configured.
    pub anthropic_api_key: Option<String>,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let config = Self {
            places_api_key: read_non_empty(PLACES_API_KEY_VAR),
            anthropic_api_key: read_non_empty(ANTHROPIC_API_KEY_VAR),
            bind_addr: read_non_empty(BIND_ADDR_VAR)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        };

        if config.places_api_key.is_none() {
            tracing::warn!("{} not set; place search will be unavailable", PLACES_API_KEY_VAR);
        }
        if config.anthropic_api_key.is_none() {
            tracing::warn!(
                "{} not set; recommendations will be unavailable",
                ANTHROPIC_API_KEY_VAR
            );
        }

        config
    }

    /// Places API key, or a typed configuration error when missing.
    pub fn require_places_key(&self) -> Result<&str, ConfigError> {
        self.places_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingCredential(PLACES_API_KEY_VAR))
    }

    /// Anthropic API key, or a typed configuration error when missing.
    pub fn require_anthropic_key(&self) -> Result<&str, ConfigError> {
        self.anthropic_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingCredential(ANTHROPIC_API_KEY_VAR))
    }
}

fn read_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}
