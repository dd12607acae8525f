// Time Provider Port (for testability)

use chrono::{DateTime, Utc};

/// Time provider interface (allows freezing the clock in tests)
pub trait TimeProvider: Send + Sync {
    /// Current instant (UTC)
    fn now(&self) -> DateTime<Utc>;
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Frozen clock: always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeProvider {
    now: DateTime<Utc>,
}

impl FixedTimeProvider {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
