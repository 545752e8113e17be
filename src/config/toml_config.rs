use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::facility::{Facility, MAX_FLOORS, MAX_SLOTS_PER_FLOOR};
use crate::domain::model::{FeeUpdate, VehicleClass};
use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::{validate_range, Validate};

/// A facility description loaded from a TOML file and applied at startup,
/// so an operator does not have to walk through the menu on every launch.
///
/// ```toml
/// [facility]
/// floors = 2
/// slots_per_floor = 20
///
/// [fees]
/// first_hour = 2.5
///
/// [layout]
/// motorcycle_per_floor = 4
/// large_per_floor = 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityFile {
    pub facility: FacilitySection,
    /// Partial override; omitted fields keep the default schedule.
    pub fees: Option<FeeUpdate>,
    pub layout: Option<LayoutSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilitySection {
    pub floors: u32,
    pub slots_per_floor: u32,
}

/// Per-floor class mix: the first `motorcycle_per_floor` slots of each floor
/// take motorcycles, the last `large_per_floor` take large cars, the rest
/// stay regular car slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSection {
    pub motorcycle_per_floor: Option<u32>,
    pub large_per_floor: Option<u32>,
}

impl FacilityFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str_content(&content)
    }

    pub fn from_str_content(content: &str) -> Result<Self> {
        let file: FacilityFile = toml::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    /// Configure `facility` from this description: build the slots, merge the
    /// fee overrides, then dedicate the layout's slots to their classes.
    ///
    /// Re-validates first: the fields are public and the type deserializes
    /// directly, so this instance may not have come through [`from_file`].
    ///
    /// [`from_file`]: FacilityFile::from_file
    pub fn apply(&self, facility: &mut Facility) -> Result<()> {
        self.validate()?;
        facility.configure(self.facility.floors, self.facility.slots_per_floor)?;

        if let Some(fees) = &self.fees {
            facility.set_fee_schedule(fees);
        }

        if let Some(layout) = &self.layout {
            let per_floor = self.facility.slots_per_floor;
            let motorcycles = layout.motorcycle_per_floor.unwrap_or(0);
            let large = layout.large_per_floor.unwrap_or(0);

            for floor in 0..self.facility.floors {
                let base = floor * per_floor + 1;
                for id in base..base + motorcycles {
                    facility.assign_slot_class(id, VehicleClass::Motorcycle)?;
                }
                for id in (base + per_floor - large)..(base + per_floor) {
                    facility.assign_slot_class(id, VehicleClass::LargeCar)?;
                }
            }
        }

        Ok(())
    }
}

impl Validate for FacilityFile {
    fn validate(&self) -> Result<()> {
        validate_range("facility.floors", self.facility.floors, 1, MAX_FLOORS)?;
        validate_range(
            "facility.slots_per_floor",
            self.facility.slots_per_floor,
            1,
            MAX_SLOTS_PER_FLOOR,
        )?;

        if let Some(layout) = &self.layout {
            let reserved =
                layout.motorcycle_per_floor.unwrap_or(0) + layout.large_per_floor.unwrap_or(0);
            if reserved > self.facility.slots_per_floor {
                return Err(ParkingError::InvalidConfigValue {
                    field: "layout".to_string(),
                    value: reserved.to_string(),
                    reason: format!(
                        "layout reserves more slots than the {} available per floor",
                        self.facility.slots_per_floor
                    ),
                });
            }
        }

        Ok(())
    }
}
