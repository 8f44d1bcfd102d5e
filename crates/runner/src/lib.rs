//! Session Runner
//!
//! Drives one trading session against the exchange:
//!
//! - **Config**: session parameters, loaded from JSON and overridden from the CLI
//! - **Session**: the receive / aggregate / evaluate / send loop
//! - **Report**: per-symbol tick history written out after the session
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────┐
//!                 │      Exchange       │
//!                 └──────────┬──────────┘
//!                   lines ▲  │ lines
//! ┌─────────────────────────┼──▼─────────────────────────────┐
//! │ Session                 │                                │
//! │   LineTransport ──► decode ──► TickAggregator            │
//! │        ▲                           │ snapshot per tick   │
//! │        │                           ▼                     │
//! │     encode ◄── OrderSequencer ◄── RuleBook               │
//! │                                    │                     │
//! │                              SnapshotHistory             │
//! └────────────────────────────────────┬─────────────────────┘
//!                                      ▼
//!                               write_report (csv)
//! ```

pub mod args;
pub mod config;
pub mod error;
pub mod report;
pub mod session;

// Re-export main types
pub use args::Args;
pub use config::SessionConfig;
pub use error::{ConfigError, ReportWriteError, SessionError};
pub use report::write_report;
pub use session::{Session, SessionOutcome, SessionSummary, run_session};
