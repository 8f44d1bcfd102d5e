use etc_core::Timestamp;

/// Port for time abstraction
///
/// This allows the session to use different time sources:
/// - Real system time for live trading
/// - Manually advanced time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
