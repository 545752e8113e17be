pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod app;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::FacilityFile;
pub use core::{facility::Facility, pricing::compute_fee};
pub use domain::model::{
    Client, ClientKind, FeeSchedule, FeeUpdate, OccupancySnapshot, Slot, Vehicle, VehicleClass,
};
pub use utils::error::{ParkingError, Result};
