//! Database migrations
//!
//! Manages database schema versioning. The driver table is normally owned
//! by the surrounding service; these migrations create it when the core
//! runs against its own database (tests, local development).

use rusqlite::Connection;
use tracing::{debug, error, info};

use super::connection::DatabaseError;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all pending migrations
pub fn run_migrations(conn: &Connection) -> Result<(), DatabaseError> {
    let current_version = get_schema_version(conn)?;

    if current_version < SCHEMA_VERSION {
        info!(
            from_version = current_version,
            to_version = SCHEMA_VERSION,
            "Running database migrations"
        );

        if current_version < 1 {
            migrate_v1(conn).inspect_err(|e| {
                error!(version = 1, error = %e, "Migration V001 (driver positions) failed");
            })?;
        }

        set_schema_version(conn, SCHEMA_VERSION)?;
        info!(version = SCHEMA_VERSION, "Database migrations complete");
    } else {
        debug!(version = current_version, "Database schema is up to date");
    }

    Ok(())
}

/// Get current schema version
fn get_schema_version(conn: &Connection) -> Result<i32, DatabaseError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        [],
    )?;

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

/// Set schema version
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration to version 1: driver positions
fn migrate_v1(conn: &Connection) -> Result<(), DatabaseError> {
    debug!("Applying migration V001: driver positions");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS drivers (
            id TEXT PRIMARY KEY,
            latitude REAL NOT NULL CHECK(latitude BETWEEN -90.0 AND 90.0),
            longitude REAL NOT NULL CHECK(longitude BETWEEN -180.0 AND 180.0),
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_drivers_latitude ON drivers(latitude);
        ",
    )
    .map_err(|e| DatabaseError::Migration(format!("V001: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_create_drivers_table() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM drivers", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn out_of_range_latitude_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO drivers (id, latitude, longitude, updated_at) VALUES ('x', 91.0, 0.0, 'now')",
            [],
        );
        assert!(result.is_err());
    }
}
