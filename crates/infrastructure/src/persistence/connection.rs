//! Database connection management
//!
//! Provides SQLite connection pooling via r2d2. Every pooled connection
//! gets the `central_angle` scalar function the driver index relies on.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, functions::FunctionFlags};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

/// Database errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// SQLite connection pool type alias
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Create a new connection pool
///
/// An in-memory database lives inside a single connection, so `:memory:`
/// always gets a pool of size one.
pub fn create_pool(config: &DatabaseConfig) -> Result<ConnectionPool, DatabaseError> {
    info!(path = %config.path, max_connections = config.max_connections, "Creating database connection pool");

    let (manager, max_size) = if config.is_in_memory() {
        (SqliteConnectionManager::memory(), 1)
    } else {
        let parent = Path::new(&config.path)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());
        if let Some(parent) = parent {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Migration(format!("Failed to create database directory: {e}"))
            })?;
        }
        (
            SqliteConnectionManager::file(&config.path),
            config.max_connections,
        )
    };

    let manager = manager.with_init(initialize_connection);

    let pool = Pool::builder().max_size(max_size).build(manager)?;

    if config.run_migrations {
        let conn = pool.get()?;
        crate::persistence::migrations::run_migrations(&conn)?;
    }

    debug!("Database connection pool created successfully");
    Ok(pool)
}

/// Per-connection settings and SQL functions
fn initialize_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )?;
    register_geo_functions(conn)
}

/// Register `central_angle(lat1, lon1, lat2, lon2)` returning radians
pub fn register_geo_functions(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.create_scalar_function(
        "central_angle",
        4,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let lat1: f64 = ctx.get(0)?;
            let lon1: f64 = ctx.get(1)?;
            let lat2: f64 = ctx.get(2)?;
            let lon2: f64 = ctx.get(3)?;
            Ok(domain::central_angle(lat1, lon1, lat2, lon2))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_in_memory_pool() {
        let pool = create_pool(&DatabaseConfig::for_testing());
        assert!(pool.is_ok());
    }

    #[test]
    fn in_memory_pool_has_single_connection() {
        let config = DatabaseConfig {
            max_connections: 8,
            ..DatabaseConfig::for_testing()
        };
        let pool = create_pool(&config).unwrap();
        assert_eq!(pool.max_size(), 1);
    }

    #[test]
    fn central_angle_function_is_registered() {
        let pool = create_pool(&DatabaseConfig::for_testing()).unwrap();
        let conn = pool.get().unwrap();

        let angle: f64 = conn
            .query_row("SELECT central_angle(0.0, 0.0, 0.0, 90.0)", [], |row| {
                row.get(0)
            })
            .unwrap();

        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn file_pool_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("drivers.db");
        let config = DatabaseConfig {
            path: path.to_string_lossy().into_owned(),
            ..DatabaseConfig::for_testing()
        };

        let pool = create_pool(&config).unwrap();

        assert!(path.exists());
        assert!(pool.get().is_ok());
    }

    #[test]
    fn database_error_display() {
        let err = DatabaseError::Migration("bad schema".to_string());
        assert!(err.to_string().contains("bad schema"));
    }
}
