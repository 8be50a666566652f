//! Outcome used when the deadline wins the race.

use std::fmt;
use std::future::{Future, Ready};

/// What to produce when the deadline elapses first.
///
/// `Value` and `Error` are shorthand for a `Produce` factory that resolves
/// or rejects immediately.
pub enum Fallback<T, E, F = fn() -> Ready<Result<T, E>>> {
    /// Resolve with this value.
    Value(T),
    /// Reject with this error.
    Error(E),
    /// Invoke this zero-argument factory and adopt its outcome.
    Produce(F),
}

impl<T, E> Fallback<T, E> {
    /// Fallback that resolves with `value`.
    #[must_use]
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Fallback that rejects with `error`.
    #[must_use]
    pub const fn error(error: E) -> Self {
        Self::Error(error)
    }
}

impl<T, E, F, Fut> Fallback<T, E, F>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    /// Fallback produced lazily by `factory`.
    pub const fn produce(factory: F) -> Self {
        Self::Produce(factory)
    }

    /// Resolve the fallback. A factory is only invoked here.
    pub async fn resolve(self) -> Result<T, E> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(error) => Err(error),
            Self::Produce(factory) => factory().await,
        }
    }
}

impl<T, E, F> fmt::Debug for Fallback<T, E, F>
where
    T: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Self::Produce(_) => f.write_str("Produce(..)"),
        }
    }
}
