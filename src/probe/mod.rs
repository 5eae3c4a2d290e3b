//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler loop
//!     → HttpProber::probe() (http.rs)
//!     → ProbeOutcome (outcome.rs)
//!     → Verdict tracker
//! ```
//!
//! # Design Decisions
//! - Every execution path produces a ProbeOutcome; no error escapes the prober
//! - Hard timeout aborts the in-flight request
//! - No retries here; scheduling policy lives in the monitor loop
//! - Redirects are not followed so 3xx statuses are observed directly

pub mod http;
pub mod outcome;

pub use http::HttpProber;
pub use outcome::{FailureReason, ProbeOutcome};
