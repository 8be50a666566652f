//! Tokio runtime spawner implementation.

use std::future::Future;
use std::io;
use std::sync::Arc;

use crate::core::{RaceError, Spawn};

/// Owns a runtime created by the spawner and shuts it down without blocking,
/// so the last clone may be dropped from async code.
#[derive(Debug)]
struct OwnedRuntime(Option<tokio::runtime::Runtime>);

impl Drop for OwnedRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            runtime.shutdown_background();
        }
    }
}

/// Tokio-based spawner that runs detached operations on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioSpawner {
    handle: tokio::runtime::Handle,
    _runtime: Option<Arc<OwnedRuntime>>,
}

impl TokioSpawner {
    /// Create a spawner from a tokio runtime handle.
    #[must_use]
    pub const fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            _runtime: None,
        }
    }

    /// Create a spawner for the runtime the caller is running on.
    pub fn current() -> Result<Self, RaceError> {
        tokio::runtime::Handle::try_current()
            .map(Self::new)
            .map_err(|e| RaceError::RuntimeUnavailable(e.to_string()))
    }

    /// Create a spawner that owns a new multi-threaded runtime.
    ///
    /// Dropping the last clone shuts the runtime down in the background;
    /// detached operations still running on it are cancelled.
    pub fn with_worker_threads(worker_threads: usize) -> Result<Self, io::Error> {
        if worker_threads == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "worker_threads must be greater than 0",
            ));
        }
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .enable_all()
            .build()?;
        Ok(Self {
            handle: runtime.handle().clone(),
            _runtime: Some(Arc::new(OwnedRuntime(Some(runtime)))),
        })
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(fut);
    }
}
