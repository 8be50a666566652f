//! Configuration models for deadlines and abandon policy.

pub mod race;

pub use race::{AbandonPolicy, RaceConfig, ENV_ABANDON, ENV_DEFAULT_DEADLINE_MS};
