//! DevOps info service.
//!
//! A small HTTP service with two read-only endpoints:
//!
//! ```text
//! GET /        service identity, host facts, uptime, request echo
//! GET /health  {"status":"healthy","timestamp":...,"uptime_seconds":...}
//! ```
//!
//! The only process-wide state is the start instant captured in `main`;
//! uptime is measured against it on every request.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`uptime`]: Uptime calculation and formatting
//! - [`system`]: Host and platform facts
//! - [`api`]: HTTP handlers and router
//! - [`server`]: Listener binding and serve loop
//! - [`metrics`]: Request metrics and Prometheus exporter
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod system;
pub mod uptime;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
