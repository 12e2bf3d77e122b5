//! Logging infrastructure
//!
//! Structured `tracing` output for the location core.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
