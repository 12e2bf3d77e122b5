//! Persistence module
//!
//! SQLite-backed driver position index with spherical-cap queries.

pub mod connection;
pub mod driver_index;
pub mod migrations;

pub use connection::{ConnectionPool, DatabaseError, create_pool, register_geo_functions};
pub use driver_index::SqliteDriverIndex;
