//! Application error types.

use tabletop_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for a campaign.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable holds an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// A domain operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
