//! Error types for race configuration and deadline reporting.

use thiserror::Error;

/// Errors produced by the racer itself.
///
/// Operation and fallback errors never pass through this type; they reach the
/// caller exactly as produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    /// The deadline elapsed before the operation settled.
    #[error("deadline of {deadline_ms}ms elapsed")]
    DeadlineElapsed {
        /// Deadline that was exceeded, in milliseconds.
        deadline_ms: u64,
    },
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// No async runtime was available to spawn onto.
    #[error("runtime unavailable: {0}")]
    RuntimeUnavailable(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
