use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::pricing;
use crate::domain::model::{
    Client, FeeSchedule, FeeUpdate, Occupancy, OccupancySnapshot, Slot, Vehicle, VehicleClass,
};
use crate::utils::error::{ParkingError, Result};

pub const MAX_FLOORS: u32 = 5;
pub const MAX_SLOTS_PER_FLOOR: u32 = 200;

/// The whole facility: slot registry, client directory and fee schedule.
///
/// There is no ambient global; callers construct one instance and thread it
/// through every operation by mutable reference. All state is in-memory and
/// dies with the process.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Facility {
    floors: u32,
    slots_per_floor: u32,
    /// Flat, in slot-id order (floor-major). Allocation scans this linearly;
    /// fine at the supported scale of at most 1000 slots.
    slots: Vec<Slot>,
    /// Registration order preserved; client listing reports it as-is.
    clients: Vec<Client>,
    fees: FeeSchedule,
}

impl Facility {
    /// An unconfigured facility: zero slots, default fee schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)build the slot registry with `floors * slots_per_floor` slots.
    ///
    /// Slot ids are assigned floor-major, starting at 1. Every slot starts
    /// free and accepts [`VehicleClass::Car`]; use [`assign_slot_class`] to
    /// dedicate slots to other classes afterwards.
    ///
    /// This is a destructive reset, not a resize: any currently parked
    /// vehicle is discarded with the old slots. Clients and fees survive.
    /// On failure nothing changes.
    ///
    /// [`assign_slot_class`]: Facility::assign_slot_class
    pub fn configure(&mut self, floors: u32, slots_per_floor: u32) -> Result<()> {
        if floors > MAX_FLOORS || slots_per_floor > MAX_SLOTS_PER_FLOOR {
            return Err(ParkingError::LimitExceeded {
                floors,
                slots_per_floor,
            });
        }

        self.floors = floors;
        self.slots_per_floor = slots_per_floor;
        self.slots = (0..floors)
            .flat_map(|floor| {
                (0..slots_per_floor).map(move |idx| Slot {
                    id: floor * slots_per_floor + idx + 1,
                    class: VehicleClass::Car,
                    occupancy: None,
                })
            })
            .collect();

        tracing::info!(floors, slots_per_floor, "facility configured");
        Ok(())
    }

    /// Dedicate a slot to a vehicle class. Refused while the slot is occupied.
    pub fn assign_slot_class(&mut self, slot_id: u32, class: VehicleClass) -> Result<()> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.id == slot_id)
            .ok_or(ParkingError::UnknownSlot { id: slot_id })?;

        if !slot.is_free() {
            return Err(ParkingError::SlotOccupied { id: slot_id });
        }

        slot.class = class;
        Ok(())
    }

    /// Merge a partial fee update over the current schedule. Unset fields
    /// keep their prior values. Values are taken as given, negatives included.
    pub fn set_fee_schedule(&mut self, update: &FeeUpdate) {
        update.merge_into(&mut self.fees);
        tracing::debug!(fees = ?self.fees, "fee schedule updated");
    }

    /// Add a client to the directory. A duplicate id is refused, never
    /// overwritten, and leaves the directory unchanged.
    pub fn register_client(&mut self, client: Client) -> Result<()> {
        if self.clients.iter().any(|c| c.id == client.id) {
            return Err(ParkingError::DuplicateClient { id: client.id });
        }

        tracing::info!(id = client.id, name = %client.name, "client registered");
        self.clients.push(client);
        Ok(())
    }

    /// Park a vehicle in the first free slot (in id order) accepting its
    /// class, and return the slot id.
    ///
    /// An unknown `client_id` is not an error: the vehicle parks anonymously.
    /// Plates are not checked for uniqueness at entry, so the same plate can
    /// occupy two slots at once; exit then frees the lowest slot id first.
    pub fn park_vehicle(
        &mut self,
        plate: &str,
        class: VehicleClass,
        client_id: Option<u32>,
    ) -> Result<u32> {
        self.park_vehicle_at(plate, class, client_id, Utc::now())
    }

    /// Same as [`park_vehicle`], with an explicit entry timestamp.
    ///
    /// [`park_vehicle`]: Facility::park_vehicle
    pub fn park_vehicle_at(
        &mut self,
        plate: &str,
        class: VehicleClass,
        client_id: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<u32> {
        let client_id = client_id.and_then(|id| {
            if self.clients.iter().any(|c| c.id == id) {
                Some(id)
            } else {
                tracing::warn!(client_id = id, "client not registered, parking anonymously");
                None
            }
        });

        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.is_free() && s.class == class)
            .ok_or(ParkingError::NoSlotAvailable { class })?;

        slot.occupancy = Some(Occupancy {
            client_id,
            vehicle: Vehicle {
                plate: plate.to_string(),
                class,
                entered_at: now,
            },
            entered_at: now,
        });

        tracing::info!(plate, slot_id = slot.id, "vehicle parked");
        Ok(slot.id)
    }

    /// Release the first occupied slot (in id order) holding `plate` and
    /// return the fee for the elapsed stay.
    ///
    /// The fee is informational output; nothing is ledgered, and the slot is
    /// freed regardless of the amount.
    pub fn remove_vehicle(&mut self, plate: &str) -> Result<f64> {
        self.remove_vehicle_at(plate, Utc::now())
    }

    /// Same as [`remove_vehicle`], with an explicit exit timestamp.
    ///
    /// [`remove_vehicle`]: Facility::remove_vehicle
    pub fn remove_vehicle_at(&mut self, plate: &str, now: DateTime<Utc>) -> Result<f64> {
        for slot in &mut self.slots {
            let entered_at = match &slot.occupancy {
                Some(occ) if occ.vehicle.plate == plate => occ.entered_at,
                _ => continue,
            };

            let elapsed_minutes = now.signed_duration_since(entered_at).num_seconds() as f64 / 60.0;
            let fee = pricing::compute_fee(elapsed_minutes, &self.fees);

            slot.occupancy = None;
            tracing::info!(plate, slot_id = slot.id, fee, "vehicle left");
            return Ok(fee);
        }

        Err(ParkingError::VehicleNotFound {
            plate: plate.to_string(),
        })
    }

    pub fn occupancy(&self) -> OccupancySnapshot {
        OccupancySnapshot {
            occupied: self.slots.iter().filter(|s| !s.is_free()).count(),
            total: self.slots.len(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.slots.is_empty()
    }

    pub fn floors(&self) -> u32 {
        self.floors
    }

    pub fn slots_per_floor(&self) -> u32 {
        self.slots_per_floor
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Directory entries in registration order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }
}
