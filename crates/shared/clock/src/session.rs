use etc_core::{TickId, Timestamp};
use etc_ports::Clock;

/// Elapsed-time view of a clock, anchored at session start
pub struct SessionClock<C: Clock> {
    clock: C,
    started_at: Timestamp,
}

impl<C: Clock> SessionClock<C> {
    /// Anchor the session at the clock's current time
    pub fn start(clock: C) -> Self {
        let started_at = clock.now();
        Self { clock, started_at }
    }

    /// Re-anchor at the clock's current time
    pub fn restart(&mut self) {
        self.started_at = self.clock.now();
    }

    /// Whole seconds elapsed since session start, truncated toward zero
    ///
    /// A clock reading earlier than the start reports zero.
    pub fn elapsed_secs(&self) -> TickId {
        let elapsed = self.clock.now() - self.started_at;
        u64::try_from(elapsed.num_seconds()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use chrono::Duration;

    #[test]
    fn test_elapsed_truncates() {
        let clock = ManualClock::new(None);
        let session = SessionClock::start(clock.clone());
        assert_eq!(session.elapsed_secs(), 0);

        clock.advance(Duration::milliseconds(999));
        assert_eq!(session.elapsed_secs(), 0);

        clock.advance(Duration::milliseconds(1));
        assert_eq!(session.elapsed_secs(), 1);

        clock.advance(Duration::milliseconds(2700));
        assert_eq!(session.elapsed_secs(), 3);
    }

    #[test]
    fn test_restart_reanchors() {
        let clock = ManualClock::new(None);
        let mut session = SessionClock::start(clock.clone());

        clock.advance(Duration::seconds(4));
        assert_eq!(session.elapsed_secs(), 4);

        session.restart();
        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn test_clock_before_start_is_zero() {
        let clock = ManualClock::new(None);
        let session = SessionClock::start(clock.clone());

        clock.advance(Duration::seconds(-5));
        assert_eq!(session.elapsed_secs(), 0);
    }
}
