//! Configuration errors shared across the workspace.

use thiserror::Error;

/// Errors arising from missing or invalid runtime configuration.
///
/// Distinct from provider errors: a missing credential is detected before
/// any network call and is never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::MissingCredential(_) => "API key not configured",
            ConfigError::Invalid(_) => "Invalid server configuration",
        }
    }
}
