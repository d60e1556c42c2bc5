//! Toll Gate is a command-line tool for recording toll payments.
//!
//! An operator picks a vehicle type, the toll is looked up in a fixed fee
//! schedule and the payment is saved to an SQLite database. Saved records can
//! later be listed, have their amount corrected, or be deleted.

#![warn(missing_docs)]

mod config;
mod db;
mod fee;
mod logging;
mod shell;
mod toll_record;

pub use config::{DEFAULT_DB_PATH, DEFAULT_LOG_PATH, DatabaseConfig};
pub use db::{ConnectionProvider, initialize as initialize_db};
pub use fee::{FEE_SCHEDULE, VehicleType, fee_for};
pub use logging::setup_logging;
pub use shell::{MenuOption, Shell};
pub use toll_record::{
    DeleteOutcome, RecordStore, TollAmount, TollRecord, TollRecordId, UpdateOutcome,
    create_toll_record, create_toll_record_table, delete_toll_record, get_all_toll_records,
    update_toll_amount,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The database could not be opened.
    ///
    /// Callers should pass in the database path and the original error.
    #[error("could not connect to the toll database at {0}: {1}")]
    ConnectionError(String, rusqlite::Error),

    /// A statement failed to execute, e.g., a constraint was violated or the
    /// database is corrupt.
    #[error("{0}")]
    PersistenceError(rusqlite::Error),

    /// The vehicle type is not one of the types in the fee schedule.
    #[error("invalid vehicle type \"{0}\", expected one of car, bus, truck, motorcycle or van")]
    InvalidVehicleType(String),

    /// The text could not be parsed as a toll amount.
    #[error("\"{0}\" is not a valid toll amount")]
    InvalidTollAmount(String),

    /// A negative toll amount was given.
    ///
    /// Tolls are payments received, so amounts must be zero or greater.
    #[error("{0} is a negative toll amount, which is not allowed")]
    NegativeTollAmount(f64),

    /// The text could not be parsed as a record ID.
    #[error("\"{0}\" is not a valid record ID")]
    InvalidRecordId(String),

    /// The text is not one of the numbered menu options.
    #[error("invalid option \"{0}\", enter a number between 1 and 5")]
    InvalidMenuOption(String),

    /// The answer to a yes/no question was neither yes nor no.
    #[error("invalid input \"{0}\", enter 'y' or 'n'")]
    InvalidConfirmation(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::PersistenceError(value)
    }
}
