//! Clock Infrastructure
//!
//! Provides the time sources the session reads its tick boundaries from:
//!
//! ```text
//! SystemClock (wall clock) ──┐
//!                            ├──► SessionClock (whole seconds since session start)
//! ManualClock (tests) ───────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use etc_clock::{ManualClock, SessionClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::new(None);
//! let session = SessionClock::start(clock.clone());
//!
//! clock.advance(Duration::milliseconds(1500));
//! assert_eq!(session.elapsed_secs(), 1);
//! ```

mod manual;
mod session;
mod system;

pub use manual::ManualClock;
pub use session::SessionClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use etc_ports::Clock;
