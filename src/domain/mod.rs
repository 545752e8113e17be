// Domain layer: core models only. No I/O, no collaborators.

pub mod model;

pub use model::{
    Client, ClientKind, FeeSchedule, FeeUpdate, Occupancy, OccupancySnapshot, Slot, Vehicle,
    VehicleClass,
};
