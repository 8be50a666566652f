//! # Race Timeout
//!
//! Race an asynchronous operation against a deadline. If the operation settles
//! first its result is returned as-is; if the deadline elapses first a fallback
//! value, error, or factory produces the result instead, and the operation is
//! told to stop through a cooperative cancellation signal.
//!
//! ## Entry Points
//!
//! - [`race_with_value`]: fall back to a plain value
//! - [`race_with_error`]: fall back to an error
//! - [`race_with_function`]: fall back to whatever a zero-argument factory produces
//! - [`race`]: fall back to a [`core::Fallback`] chosen at runtime
//! - [`race_or_elapsed`]: fall back to [`core::RaceError::DeadlineElapsed`]
//!
//! ## Operations and Cancellation
//!
//! An [`core::Operation`] is either an already-built future or a factory that
//! receives a [`core::CancellationSignal`]. The signal flips to aborted exactly
//! once, when the race settles. It is advisory: nothing is interrupted, the
//! operation decides when to look at it.
//!
//! ```
//! use std::time::Duration;
//! use race_timeout::core::Operation;
//! use race_timeout::race_with_value;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let op = Operation::deferred(|signal| async move {
//!     for _ in 0..100 {
//!         if signal.is_cancelled() {
//!             return Err("abandoned");
//!         }
//!         tokio::time::sleep(Duration::from_millis(10)).await;
//!     }
//!     Ok("finished")
//! });
//!
//! assert_eq!(race_with_value(op, Duration::from_millis(20), "timed out").await, Ok("timed out"));
//! # }
//! ```
//!
//! ## Configured Racer
//!
//! [`core::RaceTimeout`] carries a default deadline and an abandon policy. With
//! [`config::AbandonPolicy::Detach`] an operation that loses the race keeps
//! running on a [`core::Spawn`] implementation such as [`runtime::TokioSpawner`]
//! and its late result is discarded.
//!
//! ```rust,ignore
//! use race_timeout::builders::build_race_timeout;
//! use race_timeout::config::RaceConfig;
//! use race_timeout::runtime::TokioSpawner;
//!
//! let racer = build_race_timeout(&RaceConfig::from_env()?, TokioSpawner::current()?)?;
//! let value = racer.with_value(op, fallback).await;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Race engine, cancellation signal, operations, fallbacks, and outcomes.
pub mod core;
/// Configuration models for deadlines and abandon policy.
pub mod config;
/// Builders to construct racers from configuration.
pub mod builders;
/// Runtime adapters for running detached operations.
pub mod runtime;
/// Shared utilities.
pub mod util;

pub use crate::core::{race, race_or_elapsed, race_with_error, race_with_function, race_with_value};
