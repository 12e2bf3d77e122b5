//! Route estimation for QuickWheels
//!
//! Asks the [OpenRouteService](https://openrouteservice.org) directions API for
//! the driving distance and duration between two coordinates.
//!
//! # Architecture
//!
//! [`RoutingClient`] defines the interface, implemented by
//! [`OpenRouteServiceClient`]. Only the aggregate summary of the first returned
//! route is used; route geometry and turn instructions are ignored.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_routing::{OpenRouteServiceClient, OpenRouteServiceConfig, RoutingClient};
//!
//! let client = OpenRouteServiceClient::new(&OpenRouteServiceConfig::from_env())?;
//! let estimate = client.route_summary(&eiffel, &louvre).await?;
//! println!("{} m in {} s", estimate.distance_meters(), estimate.duration_seconds());
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{OpenRouteServiceClient, RoutingClient};
pub use config::{API_KEY_ENV, OpenRouteServiceConfig};
pub use error::RoutingError;
pub use models::{DirectionsResponse, RouteFeature, RouteSummary};
