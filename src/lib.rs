//! Single-target uptime monitor.
//!
//! Probes one HTTP endpoint, converts the stream of probe outcomes into a
//! binary health verdict, and issues rate-limited notifications when the
//! target is deemed unhealthy.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌───────────┐    ┌─────────┐    ┌───────────┐    ┌────────┐    ┌──────────┐
//!   │ scheduler │───▶│  probe  │───▶│  verdict  │───▶│ alert  │───▶│  notify  │
//!   │  (monitor)│    │ (HTTP)  │    │  tracker  │    │  gate  │    │ transport│
//!   └───────────┘    └─────────┘    └───────────┘    └────────┘    └──────────┘
//!
//!   Cross-cutting: config (env-sourced), lifecycle (signals/shutdown),
//!   structured logging via tracing.
//! ```
//!
//! Two operating modes share the pipeline:
//! - **threshold**: a long-running daemon accumulating consecutive failures
//!   before declaring a down state, alerting once per down episode;
//! - **burst**: a finite one-shot batch of probes yielding an independent
//!   verdict per invocation.

// Core pipeline
pub mod alert;
pub mod notify;
pub mod probe;
pub mod verdict;

// Scheduling
pub mod monitor;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;

pub use config::schema::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::{BurstOutcome, BurstRunner, ThresholdMonitor};
