//! Settled result of a single race.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which side of the race produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    /// The operation settled before the deadline.
    Operation,
    /// The deadline elapsed and the fallback produced the result.
    Fallback,
}

/// The single outcome of a race, with how and when it settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceOutcome<T, E> {
    /// Value or error from whichever side won, untouched.
    pub result: Result<T, E>,
    /// Side that produced `result`.
    pub settled_by: Settlement,
    /// Wall-clock time from the start of the race to settlement.
    pub elapsed: Duration,
}

impl<T, E> RaceOutcome<T, E> {
    /// Whether the deadline elapsed before the operation settled.
    pub const fn timed_out(&self) -> bool {
        matches!(self.settled_by, Settlement::Fallback)
    }

    /// Discard the bookkeeping and keep the result.
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}
