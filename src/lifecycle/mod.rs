//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM → trigger graceful shutdown
//!
//! Shutdown (shutdown.rs):
//!     broadcast to the monitor loop → loop exits between iterations
//! ```
//!
//! # Design Decisions
//! - Shutdown lands between iterations, never mid-probe
//! - Burst mode exits on its own; signal handling is for the daemon

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
