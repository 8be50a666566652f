//! Runtime adapters for running detached operations.

pub mod tokio_spawner;

pub use tokio_spawner::TokioSpawner;
