use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::ParkingError;

/// The closed set of vehicle classes a slot can accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleClass {
    Motorcycle,
    Car,
    LargeCar,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::Motorcycle,
        VehicleClass::Car,
        VehicleClass::LargeCar,
    ];
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleClass::Motorcycle => write!(f, "MOTORCYCLE"),
            VehicleClass::Car => write!(f, "CAR"),
            VehicleClass::LargeCar => write!(f, "LARGE_CAR"),
        }
    }
}

impl FromStr for VehicleClass {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MOTORCYCLE" => Ok(VehicleClass::Motorcycle),
            "CAR" => Ok(VehicleClass::Car),
            "LARGE_CAR" => Ok(VehicleClass::LargeCar),
            other => Err(ParkingError::InvalidConfigValue {
                field: "vehicle_class".to_string(),
                value: other.to_string(),
                reason: "expected MOTORCYCLE, CAR or LARGE_CAR".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientKind {
    Individual,
    Company,
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::Individual => write!(f, "INDIVIDUAL"),
            ClientKind::Company => write!(f, "COMPANY"),
        }
    }
}

/// A vehicle as recorded at entry. Discarded when it leaves; no history is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: String,
    pub class: VehicleClass,
    pub entered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub kind: ClientKind,
    /// Informational only; slot matching never consults this list.
    pub vehicles: Vec<Vehicle>,
}

/// The occupant side of a slot. Holding vehicle and entry time together makes
/// "occupied implies both present" structural rather than a runtime invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occupancy {
    /// Directory key of the registered client, if the entry named one.
    pub client_id: Option<u32>,
    pub vehicle: Vehicle,
    pub entered_at: DateTime<Utc>,
}

/// A single parking space. Identity and class are fixed at configuration time;
/// only the occupancy mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: u32,
    pub class: VehicleClass,
    pub occupancy: Option<Occupancy>,
}

impl Slot {
    pub fn is_free(&self) -> bool {
        self.occupancy.is_none()
    }
}

/// Tiered price table. `full_day` is carried in the schedule but the current
/// formula never applies it; see `core::pricing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub first_15_min: f64,
    pub first_30_min: f64,
    pub first_hour: f64,
    pub per_additional_hour: f64,
    pub full_day: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            first_15_min: 1.0,
            first_30_min: 2.0,
            first_hour: 3.0,
            per_additional_hour: 2.0,
            full_day: 20.0,
        }
    }
}

/// Partial counterpart of [`FeeSchedule`]: unset fields keep their prior value
/// when merged. Doubles as the `[fees]` section of a facility file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeeUpdate {
    pub first_15_min: Option<f64>,
    pub first_30_min: Option<f64>,
    pub first_hour: Option<f64>,
    pub per_additional_hour: Option<f64>,
    pub full_day: Option<f64>,
}

impl FeeUpdate {
    pub fn merge_into(&self, fees: &mut FeeSchedule) {
        if let Some(v) = self.first_15_min {
            fees.first_15_min = v;
        }
        if let Some(v) = self.first_30_min {
            fees.first_30_min = v;
        }
        if let Some(v) = self.first_hour {
            fees.first_hour = v;
        }
        if let Some(v) = self.per_additional_hour {
            fees.per_additional_hour = v;
        }
        if let Some(v) = self.full_day {
            fees.full_day = v;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySnapshot {
    pub occupied: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_class_from_str() {
        assert_eq!("car".parse::<VehicleClass>().unwrap(), VehicleClass::Car);
        assert_eq!(
            " LARGE_CAR ".parse::<VehicleClass>().unwrap(),
            VehicleClass::LargeCar
        );
        assert!("TRUCK".parse::<VehicleClass>().is_err());
    }

    #[test]
    fn test_fee_update_merge_keeps_unset_fields() {
        let mut fees = FeeSchedule::default();
        let update = FeeUpdate {
            first_hour: Some(5.0),
            ..Default::default()
        };
        update.merge_into(&mut fees);

        assert_eq!(fees.first_hour, 5.0);
        assert_eq!(fees.first_15_min, 1.0);
        assert_eq!(fees.full_day, 20.0);
    }
}
