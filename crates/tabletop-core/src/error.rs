//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A named entry, location, or archetype was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A persisted snapshot could not be read back into the domain model.
    #[error("malformed persisted state: {0}")]
    MalformedState(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
