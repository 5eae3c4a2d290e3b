//! Alert suppression subsystem.
//!
//! # Responsibilities
//! - Decide whether a verdict change warrants a notification right now
//! - Enforce the cooldown window between permitted alerts
//!
//! # Design Decisions
//! - Recoveries are logged by the caller, never alerted
//! - The cooldown is consumed before the send attempt, so a failed or
//!   slow delivery cannot retrigger an immediate resend
//! - The current time is injected, keeping the gate clock-free in tests

pub mod gate;

pub use gate::AlertGate;
