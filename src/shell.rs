//! The interactive menu the toll operator uses.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error, RecordStore, TollAmount, TollRecord, TollRecordId, VehicleType,
    fee::fee_for,
    toll_record::{DeleteOutcome, UpdateOutcome},
};

const CURRENCY_SYMBOL: &str = "₹";

const COLLECTION_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// The actions listed in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// 1. Collect a toll and save it.
    CollectToll,
    /// 2. Show every saved toll record.
    ViewRecords,
    /// 3. Change the amount of a toll record.
    UpdateRecord,
    /// 4. Delete a toll record.
    DeleteRecord,
    /// 5. Quit.
    Exit,
}

impl FromStr for MenuOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        match text.parse::<u8>() {
            Ok(1) => Ok(MenuOption::CollectToll),
            Ok(2) => Ok(MenuOption::ViewRecords),
            Ok(3) => Ok(MenuOption::UpdateRecord),
            Ok(4) => Ok(MenuOption::DeleteRecord),
            Ok(5) => Ok(MenuOption::Exit),
            _ => Err(Error::InvalidMenuOption(text.to_owned())),
        }
    }
}

/// Runs the menu loop, reading answers from `input` and writing to `output`.
///
/// Invalid answers are reported and the question is asked again, with no limit
/// on the number of attempts. The session ends when the operator picks
/// [MenuOption::Exit], answers "n" to the continue question, or `input` is
/// closed.
pub struct Shell<R, W> {
    store: RecordStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell that saves records to `store`.
    pub fn new(store: RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu loop until the operator exits.
    ///
    /// Database errors are shown to the operator and do not end the session.
    ///
    /// # Errors
    /// Returns an error only if reading from `input` or writing to `output`
    /// fails.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "--- Welcome to the Toll Gate Collection System ---"
        )?;
        tracing::info!("Started toll gate session");

        while self.run_menu_once()? {}

        writeln!(self.output, "Exiting system...")?;
        tracing::info!("Ended toll gate session");

        Ok(())
    }

    /// Returns whether the operator wants another round.
    fn run_menu_once(&mut self) -> io::Result<bool> {
        self.print_menu()?;

        let Some(option) = self.prompt("Select an option: ", |text| text.parse::<MenuOption>())?
        else {
            return Ok(false);
        };
        tracing::debug!("Selected {option:?}");

        let completed = match option {
            MenuOption::CollectToll => self.collect_toll()?,
            MenuOption::ViewRecords => self.view_records()?,
            MenuOption::UpdateRecord => self.update_record()?,
            MenuOption::DeleteRecord => self.delete_record()?,
            MenuOption::Exit => return Ok(false),
        };

        if completed.is_none() {
            return Ok(false);
        }

        let keep_going = self.prompt("Do you want to continue? (y/n): ", parse_confirmation)?;

        Ok(keep_going.unwrap_or(false))
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Main Menu ---")?;
        writeln!(self.output, "1. Collect Toll")?;
        writeln!(self.output, "2. View All Toll Records")?;
        writeln!(self.output, "3. Update Toll Record")?;
        writeln!(self.output, "4. Delete Toll Record")?;
        writeln!(self.output, "5. Exit")
    }

    // The actions below return `None` if the input was closed mid-action.

    fn collect_toll(&mut self) -> io::Result<Option<()>> {
        let vehicle_types: Vec<_> = VehicleType::all().map(VehicleType::as_str).collect();
        let message = format!("Enter vehicle type ({}): ", vehicle_types.join(", "));

        let Some(vehicle_type) = self.prompt(&message, |text| text.parse::<VehicleType>())? else {
            return Ok(None);
        };

        let Some(fee) = fee_for(vehicle_type.as_str()) else {
            self.print_error(format!("no toll is set for vehicle type {vehicle_type}"))?;
            return Ok(Some(()));
        };

        match self
            .store
            .create(vehicle_type.as_str(), TollAmount::new_unchecked(fee))
        {
            Ok(record) => {
                writeln!(self.output, "Toll record saved successfully.")?;
                writeln!(
                    self.output,
                    "Toll collected: {}",
                    format_amount(record.toll_amount)
                )?;
            }
            Err(error) => self.print_error(format!("error saving toll record: {error}"))?,
        }

        Ok(Some(()))
    }

    fn view_records(&mut self) -> io::Result<Option<()>> {
        let records = match self.store.list_all() {
            Ok(records) => records,
            Err(error) => {
                self.print_error(format!("error fetching toll records: {error}"))?;
                return Ok(Some(()));
            }
        };

        writeln!(self.output)?;
        writeln!(self.output, "--- Toll Records ---")?;

        if records.is_empty() {
            writeln!(self.output, "No toll records found.")?;
            return Ok(Some(()));
        }

        writeln!(
            self.output,
            "ID  | Vehicle Type | Toll Amount | Time of Collection"
        )?;
        writeln!(
            self.output,
            "--------------------------------------------------------"
        )?;

        for record in &records {
            writeln!(self.output, "{}", format_record_row(record))?;
        }

        Ok(Some(()))
    }

    fn update_record(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.prompt("Enter the record ID to update: ", parse_record_id)? else {
            return Ok(None);
        };

        let message = format!("Enter the new toll amount: {CURRENCY_SYMBOL}");
        let Some(toll_amount) = self.prompt(&message, |text| text.parse::<TollAmount>())? else {
            return Ok(None);
        };

        match self.store.update(id, toll_amount) {
            Ok(UpdateOutcome::Updated) => {
                writeln!(self.output, "Toll record updated successfully.")?
            }
            Ok(UpdateOutcome::NotFound) => writeln!(self.output, "Record with ID {id} not found.")?,
            Err(error) => self.print_error(format!("error updating toll record: {error}"))?,
        }

        Ok(Some(()))
    }

    fn delete_record(&mut self) -> io::Result<Option<()>> {
        let Some(id) = self.prompt("Enter the record ID to delete: ", parse_record_id)? else {
            return Ok(None);
        };

        match self.store.delete(id) {
            Ok(DeleteOutcome::Deleted) => {
                writeln!(self.output, "Toll record deleted successfully.")?
            }
            Ok(DeleteOutcome::NotFound) => writeln!(self.output, "Record with ID {id} not found.")?,
            Err(error) => self.print_error(format!("error deleting toll record: {error}"))?,
        }

        Ok(Some(()))
    }

    /// Ask until `parse` accepts the answer. Returns `None` if the input is closed.
    fn prompt<T>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Result<T, Error>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{message}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed while waiting for an answer");
                return Ok(None);
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(Some(value)),
                Err(error) => {
                    tracing::debug!("Rejected input: {error}");
                    self.print_error(error)?;
                }
            }
        }
    }

    fn print_error(&mut self, error: impl ToString) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            capitalise_first_char(&error.to_string())
        )
    }
}

fn parse_record_id(text: &str) -> Result<TollRecordId, Error> {
    text.parse()
        .map_err(|_| Error::InvalidRecordId(text.to_owned()))
}

fn parse_confirmation(text: &str) -> Result<bool, Error> {
    match text.to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(Error::InvalidConfirmation(text.to_owned())),
    }
}

fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

fn format_record_row(record: &TollRecord) -> String {
    let collection_time = record
        .collection_time
        .format(COLLECTION_TIME_FORMAT)
        .unwrap_or_else(|_| record.collection_time.to_string());

    format!(
        "{:<3} | {:<12} | {:<11} | {}",
        record.id,
        record.vehicle_type,
        format_amount(record.toll_amount),
        collection_time
    )
}

/// From https://crates.io/crates/capitalize
fn capitalise_first_char(string: &str) -> String {
    let mut chars = string.chars();
    let Some(first) = chars.next() else {
        return String::with_capacity(0);
    };
    first.to_uppercase().chain(chars).collect()
}


#[cfg(test)]
mod format_tests {
    use time::macros::datetime;

    use crate::TollRecord;

    use super::{capitalise_first_char, format_amount, format_record_row, parse_confirmation};

    #[test]
    fn amount_has_currency_symbol_and_two_decimals() {
        assert_eq!(format_amount(100.0), "₹100.00");
        assert_eq!(format_amount(12.5), "₹12.50");
    }

    #[test]
    fn record_row_contains_all_columns() {
        let record = TollRecord {
            id: 7,
            vehicle_type: "truck".to_owned(),
            toll_amount: 500.0,
            collection_time: datetime!(2024-03-01 08:30:15 UTC),
        };

        let row = format_record_row(&record);

        assert_eq!(
            row,
            "7   | truck        | ₹500.00     | 2024-03-01 08:30:15 UTC"
        );
    }

    #[test]
    fn confirmation_accepts_either_case() {
        assert_eq!(parse_confirmation("Y"), Ok(true));
        assert_eq!(parse_confirmation("n"), Ok(false));
        assert!(parse_confirmation("yes please").is_err());
    }

    #[test]
    fn capitalises_first_char() {
        assert_eq!(capitalise_first_char("error saving"), "Error saving");
        assert_eq!(capitalise_first_char(""), "");
    }
}
