//! Domain layer for the QuickWheels location and matching core
//!
//! Contains the coordinates, queries and estimates exchanged between the
//! geocoder, router, proximity index and live tracker. This layer has no
//! I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
