//! Builders to construct racers from configuration.

use crate::config::RaceConfig;
use crate::core::{RaceError, RaceTimeout, Spawn};

/// Build a [`RaceTimeout`] from configuration and a spawner for detached
/// operations.
pub fn build_race_timeout<S>(cfg: &RaceConfig, spawner: S) -> Result<RaceTimeout<S>, RaceError>
where
    S: Spawn,
{
    cfg.validate().map_err(RaceError::InvalidConfig)?;
    tracing::debug!(
        default_deadline_ms = cfg.default_deadline_ms,
        abandon = ?cfg.abandon,
        "building racer"
    );
    Ok(RaceTimeout::new(cfg.default_deadline_ms, spawner).with_abandon_policy(cfg.abandon))
}
