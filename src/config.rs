//! Configuration for connecting to the toll database.

use std::path::{Path, PathBuf};

/// The database file used when no path is configured.
pub const DEFAULT_DB_PATH: &str = "toll_system.db";

/// The log file used when no path is configured.
pub const DEFAULT_LOG_PATH: &str = "toll_gate.log";

/// Where the toll database lives.
///
/// The configuration is set once at start-up and passed by value to the
/// [crate::ConnectionProvider], it is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    path: PathBuf,
}

impl DatabaseConfig {
    /// Create a configuration for the SQLite database file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path to the SQLite database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
