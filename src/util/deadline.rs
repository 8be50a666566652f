//! Deadline durations.

use std::time::Duration;

/// Maximum time to wait for an operation before taking the fallback path.
///
/// Zero is allowed and fires on the first poll. Negative millisecond inputs
/// saturate to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Deadline(Duration);

impl Deadline {
    /// A deadline that elapses immediately.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Build a deadline from signed milliseconds, clamping negatives to zero.
    #[must_use]
    pub fn from_millis(ms: i64) -> Self {
        Self(Duration::from_millis(u64::try_from(ms).unwrap_or(0)))
    }

    /// The deadline as a [`Duration`].
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Whole milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }
}

impl From<Duration> for Deadline {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<u64> for Deadline {
    fn from(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl From<Deadline> for Duration {
    fn from(deadline: Deadline) -> Self {
        deadline.0
    }
}
