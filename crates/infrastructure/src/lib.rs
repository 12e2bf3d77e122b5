//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: Nominatim geocoding,
//! OpenRouteService routing, the SQLite driver index and the device position
//! feed. Also owns configuration loading, logging setup and the composition
//! root that wires everything together.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::LocationCore;
pub use config::{AppConfig, DatabaseConfig, MatchingConfig, TrackingConfig};
pub use persistence::{ConnectionPool, DatabaseError, SqliteDriverIndex, create_pool};
pub use telemetry::{TelemetryConfig, TelemetryError, TelemetryGuard, init_telemetry};
