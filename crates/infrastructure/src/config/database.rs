//! Database (SQLite) configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::default_true;

/// SQLite driver index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (`:memory:` for an in-memory database)
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum number of concurrent database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Whether to run pending migrations on startup (default: true)
    #[serde(default = "default_true")]
    pub run_migrations: bool,

    /// Upper bound for a single proximity query in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

fn default_db_path() -> String {
    "quickwheels.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_query_timeout_ms() -> u64 {
    2000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            run_migrations: true,
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    /// In-memory database with migrations applied
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            path: ":memory:".to_string(),
            max_connections: 1,
            ..Self::default()
        }
    }

    /// Whether this points at an in-memory database
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Proximity query timeout
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("database.path must not be empty".to_string());
        }
        if self.max_connections == 0 {
            return Err("database.max_connections must be greater than 0".to_string());
        }
        if self.query_timeout_ms == 0 {
            return Err("database.query_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}
