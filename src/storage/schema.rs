//! Database schema and connection management

use crate::error::{DepthChartError, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// SQLite-backed persistence for a depth chart snapshot
pub struct ChartDatabase {
    pub(crate) conn: Connection,
}

impl ChartDatabase {
    /// Open the database at the default location, creating tables if needed
    pub fn new() -> Result<Self> {
        Self::open(&Self::default_path()?)
    }

    /// Open (or create) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening chart database");
        let conn = Connection::open(path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, discarded when dropped
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the default database file
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| DepthChartError::Config {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("depth-chart").join("chart.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // One row per ranked player; depth is the zero-based rank
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS depth_chart (
                position TEXT NOT NULL,
                depth INTEGER NOT NULL CHECK (depth >= 0),
                player TEXT NOT NULL,
                PRIMARY KEY (position, depth),
                UNIQUE (position, player)
            )",
            [],
        )?;

        Ok(())
    }
}
