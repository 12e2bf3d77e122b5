//! Address geocoding for QuickWheels
//!
//! Resolves free-form addresses to coordinates and produces ranked
//! autocomplete suggestions via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the interface, implemented by
//! [`NominatimGeocodingClient`]. Every request carries the configured client
//! identifier (`User-Agent`) as required by the Nominatim usage policy and is
//! bounded by the configured timeout.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let eiffel = client.geocode("Eiffel Tower").await?;
//! let suggestions = client.suggest("Champs", 5).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
pub use models::NominatimPlace;
