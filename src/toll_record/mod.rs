//! Toll records: one row per toll payment collected at the gate.

mod db;
mod domain;
mod store;

pub use db::{
    create_toll_record, create_toll_record_table, delete_toll_record, get_all_toll_records,
    update_toll_amount,
};
pub use domain::{DeleteOutcome, TollAmount, TollRecord, TollRecordId, UpdateOutcome};
pub use store::RecordStore;
