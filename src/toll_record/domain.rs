//! Core toll record domain types.

use std::{fmt::Display, str::FromStr};

use time::OffsetDateTime;

use crate::Error;

/// Database identifier for a toll record.
pub type TollRecordId = i64;

/// A single toll payment.
#[derive(Debug, Clone, PartialEq)]
pub struct TollRecord {
    /// The ID assigned by the database. IDs are never reused.
    pub id: TollRecordId,
    /// The vehicle type the toll was collected for, e.g. "car".
    pub vehicle_type: String,
    /// The amount paid.
    pub toll_amount: f64,
    /// When the toll was collected, assigned by the database.
    pub collection_time: OffsetDateTime,
}

/// A validated toll amount: finite and not negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TollAmount(f64);

impl TollAmount {
    /// Create a toll amount.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NegativeTollAmount] if `amount` is
    /// less than zero, or [Error::InvalidTollAmount] if it is NaN or infinite.
    pub fn new(amount: f64) -> Result<Self, Error> {
        if !amount.is_finite() {
            Err(Error::InvalidTollAmount(amount.to_string()))
        } else if amount < 0.0 {
            Err(Error::NegativeTollAmount(amount))
        } else {
            Ok(Self(amount))
        }
    }

    /// Create a toll amount without validation.
    ///
    /// The caller should ensure that `amount` is finite and not negative, the
    /// database will reject negative amounts.
    pub fn new_unchecked(amount: f64) -> Self {
        Self(amount)
    }

    /// The amount as a plain number.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl FromStr for TollAmount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let amount: f64 = text
            .parse()
            .map_err(|_| Error::InvalidTollAmount(text.to_owned()))?;

        if amount.is_finite() {
            TollAmount::new(amount)
        } else {
            Err(Error::InvalidTollAmount(text.to_owned()))
        }
    }
}

impl Display for TollAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The result of changing the amount of a toll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record existed and its amount was changed.
    Updated,
    /// No record has the requested ID, nothing was changed.
    NotFound,
}

/// The result of deleting a toll record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record existed and has been removed.
    Deleted,
    /// No record has the requested ID, nothing was removed.
    NotFound,
}
