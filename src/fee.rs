//! The fixed fee schedule that maps vehicle types to toll amounts.

use std::{fmt::Display, str::FromStr};

use crate::Error;

/// The kinds of vehicle that can pass through the toll gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    /// A passenger car.
    Car,
    /// A bus or coach.
    Bus,
    /// A goods truck.
    Truck,
    /// A motorcycle or scooter.
    Motorcycle,
    /// A van.
    Van,
}

/// The toll charged for each vehicle type.
pub const FEE_SCHEDULE: [(VehicleType, f64); 5] = [
    (VehicleType::Car, 100.0),
    (VehicleType::Bus, 250.0),
    (VehicleType::Truck, 500.0),
    (VehicleType::Motorcycle, 50.0),
    (VehicleType::Van, 200.0),
];

impl VehicleType {
    /// Every vehicle type, in fee schedule order.
    pub fn all() -> impl Iterator<Item = VehicleType> {
        FEE_SCHEDULE.into_iter().map(|(vehicle_type, _)| vehicle_type)
    }

    /// The lowercase name stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Bus => "bus",
            VehicleType::Truck => "truck",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Van => "van",
        }
    }

    /// The toll for this vehicle type according to [FEE_SCHEDULE].
    pub fn toll_fee(self) -> f64 {
        FEE_SCHEDULE
            .iter()
            .find_map(|&(vehicle_type, fee)| (vehicle_type == self).then_some(fee))
            .unwrap_or_default()
    }
}

impl FromStr for VehicleType {
    type Err = Error;

    /// Parse a vehicle type, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        VehicleType::all()
            .find(|vehicle_type| vehicle_type.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::InvalidVehicleType(name.to_owned()))
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up the toll for `category`, ignoring letter case.
///
/// Returns `None` if `category` is not in the fee schedule, in which case no
/// toll is due and no record should be created.
pub fn fee_for(category: &str) -> Option<f64> {
    category.parse::<VehicleType>().ok().map(VehicleType::toll_fee)
}
