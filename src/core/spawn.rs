//! Runtime spawning abstraction.

use std::future::Future;

/// Abstraction for spawning detached work on a runtime.
pub trait Spawn {
    /// Spawn a future and forget about it.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
