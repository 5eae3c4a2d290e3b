//! Verdict subsystem.
//!
//! # Data Flow
//! ```text
//! Threshold mode (tracker.rs):
//!     Each outcome
//!     → consecutive-failure count
//!     → edge-triggered WentDown / Recovered transition
//!
//! Burst mode (burst.rs):
//!     Fixed batch of outcomes
//!     → whole-batch classification, no session state
//! ```
//!
//! # Design Decisions
//! - Transitions fire exactly once per episode, not per failing probe
//! - Any failure reason counts the same toward the verdict
//! - Burst runs are independent; no Recovered transition exists there

pub mod burst;
pub mod tracker;

pub use burst::{classify, BurstVerdict};
pub use tracker::{HealthTracker, Transition};
