use thiserror::Error;

use crate::domain::model::VehicleClass;

/// Everything here is a recoverable condition reported to the caller; the
/// interactive layer renders it and re-prompts. No operation leaves partial
/// state behind on failure.
#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("facility limits exceeded: {floors} floors x {slots_per_floor} slots (max 5 x 200)")]
    LimitExceeded { floors: u32, slots_per_floor: u32 },

    #[error("client {id} is already registered")]
    DuplicateClient { id: u32 },

    #[error("no free slot for a {class} vehicle")]
    NoSlotAvailable { class: VehicleClass },

    #[error("no parked vehicle with plate {plate}")]
    VehicleNotFound { plate: String },

    #[error("no slot with id {id}")]
    UnknownSlot { id: u32 },

    #[error("slot {id} is occupied")]
    SlotOccupied { id: u32 },

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ParkingError>;
