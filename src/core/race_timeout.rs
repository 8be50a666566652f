//! A racer carrying a default deadline and an abandon policy.
//!
//! The free functions in [`crate::core::race`] drop an abandoned operation,
//! which stops it at its next suspension point. `RaceTimeout` can instead
//! detach the abandoned operation onto a spawner so it runs to completion in
//! the background, watching its aborted signal, with its late result
//! discarded.
//!
//! ```rust,ignore
//! use race_timeout::builders::build_race_timeout;
//! use race_timeout::config::RaceConfig;
//! use race_timeout::runtime::TokioSpawner;
//!
//! let racer = build_race_timeout(&RaceConfig::from_env()?, TokioSpawner::current()?)?;
//! let body = racer.with_value(Operation::immediate(fetch()), fallback_body).await?;
//! ```

use std::future::{ready, Future};

use super::race::run_race;
use super::{CancellationSignal, Fallback, Operation, RaceOutcome, Spawn};
use crate::config::AbandonPolicy;
use crate::util::Deadline;

/// Configured racer. Build one with [`RaceTimeout::new`] or
/// [`crate::builders::build_race_timeout`].
#[derive(Debug, Clone)]
pub struct RaceTimeout<S> {
    deadline: Deadline,
    abandon: AbandonPolicy,
    spawner: S,
}

impl<S> RaceTimeout<S>
where
    S: Spawn,
{
    /// Create a racer with a default deadline, dropping abandoned operations.
    #[must_use]
    pub fn new(deadline: impl Into<Deadline>, spawner: S) -> Self {
        Self {
            deadline: deadline.into(),
            abandon: AbandonPolicy::Drop,
            spawner,
        }
    }

    /// Set what happens to an operation that loses the race.
    #[must_use]
    pub fn with_abandon_policy(mut self, abandon: AbandonPolicy) -> Self {
        self.abandon = abandon;
        self
    }

    /// Default deadline applied by the methods without a `_within` suffix.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Current abandon policy.
    #[must_use]
    pub const fn abandon_policy(&self) -> AbandonPolicy {
        self.abandon
    }

    /// Race with the default deadline and report how it settled.
    pub async fn race_reported<T, E, Fut, F, FbFut, Fb>(
        &self,
        operation: Operation<Fut, F>,
        fallback: Fallback<T, E, Fb>,
    ) -> RaceOutcome<T, E>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut,
        Fb: FnOnce() -> FbFut,
        FbFut: Future<Output = Result<T, E>>,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.race_reported_within(operation, self.deadline, fallback)
            .await
    }

    /// Race with an explicit deadline and report how it settled.
    pub async fn race_reported_within<T, E, Fut, F, FbFut, Fb>(
        &self,
        operation: Operation<Fut, F>,
        deadline: impl Into<Deadline>,
        fallback: Fallback<T, E, Fb>,
    ) -> RaceOutcome<T, E>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut,
        Fb: FnOnce() -> FbFut,
        FbFut: Future<Output = Result<T, E>>,
        T: Send + 'static,
        E: Send + 'static,
    {
        let abandon = self.abandon;
        run_race(operation, deadline.into(), fallback, |task| match abandon {
            AbandonPolicy::Drop => drop(task),
            AbandonPolicy::Detach => self.spawner.spawn(async move {
                let ok = task.await.is_ok();
                tracing::debug!(ok, "abandoned operation settled late; result discarded");
            }),
        })
        .await
    }

    /// Race with the default deadline, resolving with a [`Fallback`].
    pub async fn race<T, E, Fut, F, FbFut, Fb>(
        &self,
        operation: Operation<Fut, F>,
        fallback: Fallback<T, E, Fb>,
    ) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut,
        Fb: FnOnce() -> FbFut,
        FbFut: Future<Output = Result<T, E>>,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.race_reported(operation, fallback).await.into_result()
    }

    /// Race with the default deadline; on timeout adopt `fallback`'s outcome.
    pub async fn with_function<T, E, Fut, F, FbFut, Fb>(
        &self,
        operation: Operation<Fut, F>,
        fallback: Fb,
    ) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut,
        Fb: FnOnce() -> FbFut,
        FbFut: Future<Output = Result<T, E>>,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.with_function_within(operation, self.deadline, fallback)
            .await
    }

    /// Race with an explicit deadline; on timeout adopt `fallback`'s outcome.
    pub async fn with_function_within<T, E, Fut, F, FbFut, Fb>(
        &self,
        operation: Operation<Fut, F>,
        deadline: impl Into<Deadline>,
        fallback: Fb,
    ) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut,
        Fb: FnOnce() -> FbFut,
        FbFut: Future<Output = Result<T, E>>,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.race_reported_within(operation, deadline, Fallback::Produce(fallback))
            .await
            .into_result()
    }

    /// Race with the default deadline, resolving with `value` on timeout.
    pub async fn with_value<T, E, Fut, F>(&self, operation: Operation<Fut, F>, value: T) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.with_function(operation, move || ready(Ok(value))).await
    }

    /// Race with the default deadline, rejecting with `error` on timeout.
    pub async fn with_error<T, E, Fut, F>(&self, operation: Operation<Fut, F>, error: E) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        F: FnOnce(CancellationSignal) -> Fut,
        T: Send + 'static,
        E: Send + 'static,
    {
        self.with_function(operation, move || ready(Err(error))).await
    }
}
