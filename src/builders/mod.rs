//! Builders to construct racers from configuration.

pub mod race_builder;

pub use race_builder::build_race_timeout;
