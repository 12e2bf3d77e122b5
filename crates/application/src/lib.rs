//! Application layer - Use cases and orchestration
//!
//! Defines the ports through which the core reaches geocoding, routing, the
//! driver proximity index and device geolocation, and the services that
//! implement the ride-request use cases on top of them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
