//! Opens connections to the toll database and sets up its schema.

use rusqlite::{Connection, OpenFlags};

use crate::{DatabaseConfig, Error, toll_record::create_toll_record_table};

/// Opens a fresh connection to the toll database for each operation.
///
/// There is no pooling: callers own the returned [Connection] and it is closed
/// when dropped, including on early returns and errors.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    config: DatabaseConfig,
}

impl ConnectionProvider {
    /// Create a provider for the database described by `config`.
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// The configuration this provider connects with.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Open a connection to an existing database.
    ///
    /// # Errors
    /// Returns [Error::ConnectionError] if the database file does not exist or
    /// cannot be opened for reading and writing.
    pub fn open(&self) -> Result<Connection, Error> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        Connection::open_with_flags(self.config.path(), flags)
            .map_err(|error| self.connection_error(error))
    }

    /// Open a connection, creating the database file if it does not exist.
    ///
    /// # Errors
    /// Returns [Error::ConnectionError] if the database cannot be opened or
    /// created, e.g., the parent directory does not exist.
    pub fn open_or_create(&self) -> Result<Connection, Error> {
        Connection::open(self.config.path()).map_err(|error| self.connection_error(error))
    }

    fn connection_error(&self, error: rusqlite::Error) -> Error {
        let path = self.config.path().display().to_string();
        tracing::error!("could not open the database at {path}: {error}");
        Error::ConnectionError(path, error)
    }
}

/// Create the application tables if they do not already exist.
///
/// # Errors
/// Returns [Error::PersistenceError] if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_toll_record_table(connection)?;

    Ok(())
}
