//! Race engine and free-function entry points.
//!
//! Every entry point funnels into [`run_race`]:
//!
//! 1. A fresh [`CancellationSource`] is created and the operation is started
//!    with its signal.
//! 2. The operation and a `tokio::time::sleep` timer are polled together,
//!    operation first. If both are ready in the same poll the operation wins.
//! 3. Whichever side settles first, the signal is aborted and the timer is
//!    released before anything else is awaited.
//! 4. On timeout the operation future is handed to an abandon hook (the free
//!    functions simply drop it) and the fallback is resolved. A fallback
//!    factory therefore always observes an aborted signal.

use std::future::{ready, Future};
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::time::Instant;
use tracing::Instrument;

use super::{CancellationSignal, CancellationSource, Fallback, Operation, RaceError, RaceOutcome, Settlement};
use crate::util::Deadline;

static NEXT_RACE_ID: AtomicU64 = AtomicU64::new(1);

enum Winner<T, E> {
    Operation(Result<T, E>),
    Timer,
}

/// Core engine shared by every entry point.
///
/// `abandon` receives the operation future when the deadline wins; it is
/// never called on the fast path.
pub(crate) async fn run_race<T, E, Fut, F, FbFut, Fb, A>(
    operation: Operation<Fut, F>,
    deadline: Deadline,
    fallback: Fallback<T, E, Fb>,
    abandon: A,
) -> RaceOutcome<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(CancellationSignal) -> Fut,
    Fb: FnOnce() -> FbFut,
    FbFut: Future<Output = Result<T, E>>,
    A: FnOnce(Pin<Box<Fut>>),
{
    let race_id = NEXT_RACE_ID.fetch_add(1, Ordering::Relaxed);
    let span = tracing::debug_span!(
        "race",
        race_id,
        deadline_ms = deadline.as_millis(),
        deferred = operation.is_deferred()
    );

    async move {
        let started = Instant::now();
        let source = CancellationSource::new();
        let mut task = Box::pin(operation.start(source.signal()));
        let mut timer = Box::pin(tokio::time::sleep(deadline.as_duration()));

        let winner = tokio::select! {
            biased;
            result = &mut task => Winner::Operation(result),
            () = &mut timer => Winner::Timer,
        };

        source.cancel();
        drop(timer);

        match winner {
            Winner::Operation(result) => {
                tracing::debug!(ok = result.is_ok(), "operation settled before deadline");
                RaceOutcome {
                    result,
                    settled_by: Settlement::Operation,
                    elapsed: started.elapsed(),
                }
            }
            Winner::Timer => {
                tracing::debug!("deadline elapsed; abandoning operation");
                abandon(task);
                let result = fallback.resolve().await;
                tracing::debug!(ok = result.is_ok(), "fallback settled");
                RaceOutcome {
                    result,
                    settled_by: Settlement::Fallback,
                    elapsed: started.elapsed(),
                }
            }
        }
    }
    .instrument(span)
    .await
}

/// Race `operation` against `deadline`, resolving with a [`Fallback`] on timeout.
pub async fn race<T, E, Fut, F, FbFut, Fb>(
    operation: Operation<Fut, F>,
    deadline: impl Into<Deadline>,
    fallback: Fallback<T, E, Fb>,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(CancellationSignal) -> Fut,
    Fb: FnOnce() -> FbFut,
    FbFut: Future<Output = Result<T, E>>,
{
    run_race(operation, deadline.into(), fallback, drop)
        .await
        .into_result()
}

/// Race `operation` against `deadline`; on timeout adopt the outcome of
/// `fallback`, which is invoked only after the signal has been aborted.
///
/// ```
/// use std::time::Duration;
/// use race_timeout::core::{race_with_function, Operation};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let slow = Operation::immediate(async {
///     tokio::time::sleep(Duration::from_secs(2)).await;
///     Ok::<_, String>("slow")
/// });
/// let out = race_with_function(slow, Duration::from_millis(20), || async {
///     Ok("fallback")
/// })
/// .await;
/// assert_eq!(out, Ok("fallback"));
/// # }
/// ```
pub async fn race_with_function<T, E, Fut, F, FbFut, Fb>(
    operation: Operation<Fut, F>,
    deadline: impl Into<Deadline>,
    fallback: Fb,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(CancellationSignal) -> Fut,
    Fb: FnOnce() -> FbFut,
    FbFut: Future<Output = Result<T, E>>,
{
    race(operation, deadline, Fallback::Produce(fallback)).await
}

/// Race `operation` against `deadline`, resolving with `value` on timeout.
///
/// ```
/// use race_timeout::core::{race_with_value, Operation};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let fast = Operation::immediate(async { Ok::<_, ()>(32) });
/// assert_eq!(race_with_value(fast, 2000_u64, 66).await, Ok(32));
/// # }
/// ```
pub async fn race_with_value<T, E, Fut, F>(
    operation: Operation<Fut, F>,
    deadline: impl Into<Deadline>,
    value: T,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(CancellationSignal) -> Fut,
{
    race_with_function(operation, deadline, move || ready(Ok(value))).await
}

/// Race `operation` against `deadline`, rejecting with `error` on timeout.
pub async fn race_with_error<T, E, Fut, F>(
    operation: Operation<Fut, F>,
    deadline: impl Into<Deadline>,
    error: E,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(CancellationSignal) -> Fut,
{
    race_with_function(operation, deadline, move || ready(Err(error))).await
}

/// Race `operation` against `deadline`, rejecting with
/// [`RaceError::DeadlineElapsed`] converted into the operation's error type.
pub async fn race_or_elapsed<T, E, Fut, F>(
    operation: Operation<Fut, F>,
    deadline: impl Into<Deadline>,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(CancellationSignal) -> Fut,
    E: From<RaceError>,
{
    let deadline = deadline.into();
    let elapsed = RaceError::DeadlineElapsed {
        deadline_ms: deadline.as_millis(),
    };
    race_with_error(operation, deadline, E::from(elapsed)).await
}
