//! Racer configuration.

use serde::{Deserialize, Serialize};

/// Environment variable holding the default deadline in milliseconds.
pub const ENV_DEFAULT_DEADLINE_MS: &str = "RACE_TIMEOUT_DEFAULT_DEADLINE_MS";
/// Environment variable holding the abandon policy (`drop` or `detach`).
pub const ENV_ABANDON: &str = "RACE_TIMEOUT_ABANDON";

const DEFAULT_DEADLINE_MS: u64 = 5_000;

/// What happens to an operation after the deadline wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbandonPolicy {
    /// Drop the operation future; it stops at its next suspension point.
    #[default]
    Drop,
    /// Spawn the operation so it runs to completion; its result is discarded.
    Detach,
}

impl AbandonPolicy {
    fn parse(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(Self::Drop),
            "detach" => Ok(Self::Detach),
            other => Err(format!("unknown abandon policy `{other}`")),
        }
    }
}

/// Configuration for a [`crate::core::RaceTimeout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Deadline applied when a call does not pass its own, in milliseconds.
    pub default_deadline_ms: u64,
    /// Abandon policy for operations that lose the race.
    #[serde(default)]
    pub abandon: AbandonPolicy,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            default_deadline_ms: DEFAULT_DEADLINE_MS,
            abandon: AbandonPolicy::Drop,
        }
    }
}

impl RaceConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_deadline_ms == 0 {
            return Err("default_deadline_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first if one exists. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, then validate.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, String>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_DEFAULT_DEADLINE_MS) {
            cfg.default_deadline_ms = raw
                .trim()
                .parse()
                .map_err(|e| format!("{ENV_DEFAULT_DEADLINE_MS}: {e}"))?;
        }
        if let Some(raw) = lookup(ENV_ABANDON) {
            cfg.abandon = AbandonPolicy::parse(&raw).map_err(|e| format!("{ENV_ABANDON}: {e}"))?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
