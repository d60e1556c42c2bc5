//! Toll record operations that each run on their own database connection.

use crate::{
    ConnectionProvider, Error,
    toll_record::{
        DeleteOutcome, TollAmount, TollRecord, TollRecordId, UpdateOutcome, create_toll_record,
        delete_toll_record, get_all_toll_records, update_toll_amount,
    },
};

/// Creates, lists, updates and deletes toll records.
///
/// Every method opens a new connection, runs a single statement and closes the
/// connection before returning. Nothing is shared between calls, so a failed
/// call never affects the next one.
#[derive(Debug, Clone)]
pub struct RecordStore {
    connections: ConnectionProvider,
}

impl RecordStore {
    /// Create a store that connects through `connections`.
    pub fn new(connections: ConnectionProvider) -> Self {
        Self { connections }
    }

    /// Save a toll payment.
    ///
    /// # Errors
    /// Returns [Error::ConnectionError] if the database cannot be opened, or
    /// [Error::PersistenceError] if the insert fails.
    pub fn create(&self, vehicle_type: &str, toll_amount: TollAmount) -> Result<TollRecord, Error> {
        let connection = self.connections.open()?;
        let record = create_toll_record(vehicle_type, toll_amount, &connection)?;

        tracing::info!(
            "Recorded toll {} of {} for {}",
            record.id,
            toll_amount,
            record.vehicle_type
        );

        Ok(record)
    }

    /// Get every toll record in the order they were created.
    ///
    /// # Errors
    /// Returns [Error::ConnectionError] if the database cannot be opened, or
    /// [Error::PersistenceError] if the query fails.
    pub fn list_all(&self) -> Result<Vec<TollRecord>, Error> {
        let connection = self.connections.open()?;
        let records = get_all_toll_records(&connection)?;

        tracing::debug!("Fetched {} toll records", records.len());

        Ok(records)
    }

    /// Change the amount of the toll record `id`.
    ///
    /// A missing record is reported as [UpdateOutcome::NotFound], not as an
    /// error.
    ///
    /// # Errors
    /// Returns [Error::ConnectionError] if the database cannot be opened, or
    /// [Error::PersistenceError] if the update fails.
    pub fn update(&self, id: TollRecordId, toll_amount: TollAmount) -> Result<UpdateOutcome, Error> {
        let connection = self.connections.open()?;
        let outcome = update_toll_amount(id, toll_amount, &connection)?;

        match outcome {
            UpdateOutcome::Updated => tracing::info!("Set amount of toll record {id} to {toll_amount}"),
            UpdateOutcome::NotFound => tracing::warn!("Tried to update missing toll record {id}"),
        }

        Ok(outcome)
    }

    /// Delete the toll record `id`.
    ///
    /// A missing record is reported as [DeleteOutcome::NotFound], not as an
    /// error.
    ///
    /// # Errors
    /// Returns [Error::ConnectionError] if the database cannot be opened, or
    /// [Error::PersistenceError] if the delete fails.
    pub fn delete(&self, id: TollRecordId) -> Result<DeleteOutcome, Error> {
        let connection = self.connections.open()?;
        let outcome = delete_toll_record(id, &connection)?;

        match outcome {
            DeleteOutcome::Deleted => tracing::info!("Deleted toll record {id}"),
            DeleteOutcome::NotFound => tracing::warn!("Tried to delete missing toll record {id}"),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod record_store_tests {
    use tempfile::{TempDir, tempdir};

    use crate::{
        ConnectionProvider, DatabaseConfig, Error, initialize_db,
        toll_record::{DeleteOutcome, TollAmount, UpdateOutcome},
    };

    use super::RecordStore;

    fn get_test_store() -> (TempDir, RecordStore) {
        let dir = tempdir().expect("Could not create temporary directory");
        let provider = ConnectionProvider::new(DatabaseConfig::new(dir.path().join("toll.db")));
        let connection = provider
            .open_or_create()
            .expect("Could not create database");
        initialize_db(&connection).expect("Could not initialize database");

        (dir, RecordStore::new(provider))
    }

    #[test]
    fn records_persist_across_connections() {
        let (_dir, store) = get_test_store();

        let record = store
            .create("truck", TollAmount::new_unchecked(500.0))
            .expect("Could not create toll record");

        assert_eq!(store.list_all(), Ok(vec![record]));
    }

    #[test]
    fn end_to_end_create_update_delete() {
        let (_dir, store) = get_test_store();

        let record = store.create("car", TollAmount::new_unchecked(100.0)).unwrap();
        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vehicle_type, "car");
        assert_eq!(records[0].toll_amount, 100.0);

        let outcome = store.update(record.id, TollAmount::new_unchecked(150.0));
        assert_eq!(outcome, Ok(UpdateOutcome::Updated));
        let records = store.list_all().unwrap();
        assert_eq!(records[0].toll_amount, 150.0);
        assert_eq!(records[0].id, record.id);
        assert_eq!(records[0].vehicle_type, record.vehicle_type);
        assert_eq!(records[0].collection_time, record.collection_time);

        assert_eq!(store.delete(record.id), Ok(DeleteOutcome::Deleted));
        assert_eq!(store.list_all(), Ok(vec![]));
        assert_eq!(store.delete(record.id), Ok(DeleteOutcome::NotFound));
    }

    #[test]
    fn update_missing_record_returns_not_found() {
        let (_dir, store) = get_test_store();

        let outcome = store.update(42, TollAmount::new_unchecked(10.0));

        assert_eq!(outcome, Ok(UpdateOutcome::NotFound));
    }

    #[test]
    fn operations_fail_with_connection_error_when_database_is_missing() {
        let dir = tempdir().unwrap();
        let provider = ConnectionProvider::new(DatabaseConfig::new(dir.path().join("gone.db")));
        let store = RecordStore::new(provider);

        assert!(matches!(
            store.create("car", TollAmount::new_unchecked(100.0)),
            Err(Error::ConnectionError(..))
        ));
        assert!(matches!(store.list_all(), Err(Error::ConnectionError(..))));
        assert!(matches!(
            store.update(1, TollAmount::new_unchecked(1.0)),
            Err(Error::ConnectionError(..))
        ));
        assert!(matches!(store.delete(1), Err(Error::ConnectionError(..))));
    }

    #[test]
    fn store_recovers_after_failed_operation() {
        let (_dir, store) = get_test_store();

        let record = store.create("car", TollAmount::new_unchecked(100.0)).unwrap();

        let failed = store.update(record.id, TollAmount::new_unchecked(-1.0));
        let created = store.create("van", TollAmount::new_unchecked(200.0));

        assert!(matches!(failed, Err(Error::PersistenceError(_))));
        assert!(created.is_ok());
        assert_eq!(store.list_all().unwrap()[0].toll_amount, 100.0);
    }
}
