use chrono::{Duration, Utc};
use etc_core::Timestamp;
use etc_ports::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that only moves when told to
///
/// Used to drive tick boundaries deterministically in tests. Cloning shares
/// the underlying time, so a test can keep a handle while the session owns
/// another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Timestamp,
    /// Offset from `origin` in microseconds
    offset_us: Arc<AtomicI64>,
}

impl ManualClock {
    /// Create a manual clock frozen at `initial_time` (or the current wall time)
    pub fn new(initial_time: Option<Timestamp>) -> Self {
        Self {
            origin: initial_time.unwrap_or_else(Utc::now),
            offset_us: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Move time forward (or backward, for a negative duration)
    pub fn advance(&self, by: Duration) {
        let micros = by.num_microseconds().unwrap_or(i64::MAX);
        self.offset_us.fetch_add(micros, Ordering::SeqCst);
    }

    /// Jump to an absolute offset from the clock's origin
    pub fn set_offset(&self, offset: Duration) {
        let micros = offset.num_microseconds().unwrap_or(i64::MAX);
        self.offset_us.store(micros, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.origin + Duration::microseconds(self.offset_us.load(Ordering::SeqCst))
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
