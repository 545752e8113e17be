pub mod facility;
pub mod pricing;

pub use facility::{Facility, MAX_FLOORS, MAX_SLOTS_PER_FLOOR};
pub use pricing::compute_fee;
