//! Time source consulted by the store on every create and update.

use crate::types::Timestamp;

/// Supplies the current instant.
///
/// Implementations must be non-decreasing across calls as observed by a
/// single caller; the store relies on this for `last_modification` to only
/// ever advance.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by [`chrono::Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        chrono::Utc::now()
    }
}
