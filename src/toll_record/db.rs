//! Database operations for toll records.

use rusqlite::{Connection, Row, types::Type};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    Error,
    toll_record::{DeleteOutcome, TollAmount, TollRecord, TollRecordId, UpdateOutcome},
};

/// Save a toll payment and return it with its generated ID and collection time.
///
/// The vehicle type is stored as given, it is not checked against the fee
/// schedule.
pub fn create_toll_record(
    vehicle_type: &str,
    toll_amount: TollAmount,
    connection: &Connection,
) -> Result<TollRecord, Error> {
    connection
        .prepare(
            "INSERT INTO toll_record (vehicle_type, toll_amount) VALUES (?1, ?2)
            RETURNING id, vehicle_type, toll_amount, collection_time;",
        )?
        .query_row((vehicle_type, toll_amount.as_f64()), map_row)
        .map_err(|error| error.into())
}

/// Retrieve all toll records in the order they were created.
pub fn get_all_toll_records(connection: &Connection) -> Result<Vec<TollRecord>, Error> {
    connection
        .prepare(
            "SELECT id, vehicle_type, toll_amount, collection_time
            FROM toll_record ORDER BY id ASC;",
        )?
        .query_map([], map_row)?
        .map(|maybe_record| maybe_record.map_err(|error| error.into()))
        .collect()
}

/// Set the amount of the toll record with ID `id`.
///
/// The other columns are left unchanged. The new amount does not have to
/// match the fee schedule.
pub fn update_toll_amount(
    id: TollRecordId,
    toll_amount: TollAmount,
    connection: &Connection,
) -> Result<UpdateOutcome, Error> {
    let rows_affected = connection.execute(
        "UPDATE toll_record SET toll_amount = ?1 WHERE id = ?2",
        (toll_amount.as_f64(), id),
    )?;

    if rows_affected == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    Ok(UpdateOutcome::Updated)
}

/// Delete the toll record with ID `id`.
pub fn delete_toll_record(
    id: TollRecordId,
    connection: &Connection,
) -> Result<DeleteOutcome, Error> {
    let rows_affected = connection.execute("DELETE FROM toll_record WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Ok(DeleteOutcome::NotFound);
    }

    Ok(DeleteOutcome::Deleted)
}

/// Initialize the toll record table.
///
/// `AUTOINCREMENT` stops SQLite from handing out the ID of a deleted row again.
pub fn create_toll_record_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS toll_record (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_type TEXT NOT NULL,
            toll_amount REAL NOT NULL CHECK (toll_amount >= 0),
            collection_time TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
        );",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<TollRecord, rusqlite::Error> {
    let id = row.get(0)?;
    let vehicle_type = row.get(1)?;
    let toll_amount = row.get(2)?;

    let raw_collection_time: String = row.get(3)?;
    let collection_time = OffsetDateTime::parse(&raw_collection_time, &Rfc3339)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(error)))?;

    Ok(TollRecord {
        id,
        vehicle_type,
        toll_amount,
        collection_time,
    })
}
