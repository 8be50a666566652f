//! The unit of work raced against a deadline.

use std::fmt;

use super::CancellationSignal;

/// An operation to race: either a future that is already built, or a factory
/// that builds one from the call's [`CancellationSignal`].
///
/// Use [`Operation::immediate`] and [`Operation::deferred`] to construct one;
/// they pin down the factory type parameter so it never needs spelling out.
///
/// ```
/// use race_timeout::core::Operation;
///
/// let ready = Operation::immediate(async { Ok::<_, ()>(1) });
/// let aware = Operation::deferred(|signal| async move {
///     if signal.is_cancelled() {
///         return Err("abandoned");
///     }
///     Ok(2)
/// });
/// # drop((ready, aware));
/// ```
pub enum Operation<Fut, F = fn(CancellationSignal) -> Fut> {
    /// A future that ignores cancellation; the signal has no effect on it.
    Immediate(Fut),
    /// A factory invoked once with the signal to produce the future.
    Deferred(F),
}

impl<Fut> Operation<Fut> {
    /// Wrap an already-built future.
    #[must_use]
    pub const fn immediate(future: Fut) -> Self {
        Self::Immediate(future)
    }
}

impl<Fut, F> Operation<Fut, F>
where
    F: FnOnce(CancellationSignal) -> Fut,
{
    /// Wrap a cancellation-aware factory.
    #[must_use]
    pub const fn deferred(factory: F) -> Self {
        Self::Deferred(factory)
    }

    /// Produce the future, invoking the factory with `signal` if there is one.
    pub fn start(self, signal: CancellationSignal) -> Fut {
        match self {
            Self::Immediate(future) => future,
            Self::Deferred(factory) => factory(signal),
        }
    }

    /// Whether this operation will receive the cancellation signal.
    #[must_use]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<Fut, F> fmt::Debug for Operation<Fut, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(_) => f.write_str("Operation::Immediate"),
            Self::Deferred(_) => f.write_str("Operation::Deferred"),
        }
    }
}
