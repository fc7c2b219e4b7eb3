//! Core crate for Funday: shared domain types, configuration and
//! logging setup used by every other crate in the workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::{BudgetLevel, Child, Coordinates, DateTimeSelection, Gender, Location, TimeOfDay};

use anyhow::Result;

/// Initialize logging for the application.
///
/// Respects `RUST_LOG`; defaults to `info` when unset.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Funday core initialized");
    Ok(())
}
