//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment (after optional .env load)
//!     → loader.rs (parse variables, apply defaults)
//!     → validation.rs (semantic checks, all errors reported)
//!     → MonitorConfig accepted into the system
//! ```
//!
//! # Design Decisions
//! - Environment-sourced; no config file or hot reload
//! - Missing required settings are fatal at startup, before any probe
//! - Validation is a pure function over the assembled config

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, ConfigError};
pub use schema::MonitorConfig;
