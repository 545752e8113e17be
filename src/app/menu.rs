//! Interactive menu collaborator.
//!
//! Owns everything the core refuses to do: prompting, parsing raw operator
//! input and rendering results or typed errors. The core never retries; a
//! failed operation is printed here and the loop simply comes back around.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

use crate::core::facility::Facility;
use crate::domain::model::{Client, ClientKind, FeeUpdate, VehicleClass};
use crate::utils::validation::validate_non_empty_string;

const MENU_ITEMS: &[&str] = &[
    "Configure facility",
    "Set fee schedule",
    "Register client",
    "Vehicle entry",
    "Vehicle exit",
    "Occupancy",
    "List clients",
    "Quit",
];

pub fn run_menu(facility: &mut Facility) -> Result<()> {
    loop {
        println!();
        println!("{}", "=== Parking Facility ===".bright_blue().bold());

        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => configure_facility(facility)?,
            1 => set_fee_schedule(facility)?,
            2 => register_client(facility)?,
            3 => vehicle_entry(facility)?,
            4 => vehicle_exit(facility)?,
            5 => show_occupancy(facility),
            6 => list_clients(facility),
            _ => {
                println!("{}", "Bye.".green());
                return Ok(());
            }
        }
    }
}

/// Reconfiguration is a reset, not a resize: warn before discarding parked
/// vehicles with the old slots.
fn configure_facility(facility: &mut Facility) -> Result<()> {
    let parked = facility.occupancy().occupied;
    if parked > 0 {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Reconfiguring discards {} parked vehicle(s). Continue?",
                parked
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        }
    }

    let floors: u32 = Input::new().with_prompt("Number of floors").interact_text()?;
    let slots_per_floor: u32 = Input::new()
        .with_prompt("Slots per floor")
        .interact_text()?;

    match facility.configure(floors, slots_per_floor) {
        Ok(()) => println!(
            "{}",
            format!(
                "Facility configured: {} floors, {} slots per floor.",
                floors, slots_per_floor
            )
            .green()
        ),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn set_fee_schedule(facility: &mut Facility) -> Result<()> {
    let current = facility.fees().clone();

    let update = FeeUpdate {
        first_15_min: Some(prompt_fee("First 15 min", current.first_15_min)?),
        first_30_min: Some(prompt_fee("First 30 min", current.first_30_min)?),
        first_hour: Some(prompt_fee("First hour", current.first_hour)?),
        per_additional_hour: Some(prompt_fee("Per additional hour", current.per_additional_hour)?),
        full_day: Some(prompt_fee("Full day", current.full_day)?),
    };

    facility.set_fee_schedule(&update);
    println!("{}", "Fee schedule updated.".green());
    Ok(())
}

fn prompt_fee(label: &str, current: f64) -> Result<f64> {
    let value = Input::new()
        .with_prompt(format!("{} (EUR)", label))
        .default(current)
        .interact_text()?;
    Ok(value)
}

fn register_client(facility: &mut Facility) -> Result<()> {
    let id: u32 = Input::new().with_prompt("Client id").interact_text()?;
    let name = prompt_non_empty("Name")?;
    let address = prompt_non_empty("Address")?;
    let phone = prompt_non_empty("Phone")?;
    let email = prompt_non_empty("Email")?;

    let kinds = [ClientKind::Individual, ClientKind::Company];
    let kind_idx = Select::new()
        .with_prompt("Kind")
        .items(&kinds.map(|k| k.to_string()))
        .default(0)
        .interact()?;

    let client = Client {
        id,
        name: name.clone(),
        address,
        phone,
        email,
        kind: kinds[kind_idx],
        vehicles: vec![],
    };

    match facility.register_client(client) {
        Ok(()) => println!("{}", format!("Client {} registered.", name).green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn vehicle_entry(facility: &mut Facility) -> Result<()> {
    let plate = prompt_non_empty("Plate")?;
    let class = prompt_vehicle_class()?;

    // Blank or unparsable input means no client, mirroring the optional field.
    let raw: String = Input::new()
        .with_prompt("Client id (blank for none)")
        .allow_empty(true)
        .interact_text()?;
    let client_id = raw.trim().parse::<u32>().ok();

    match facility.park_vehicle(&plate, class, client_id) {
        Ok(slot_id) => println!(
            "{}",
            format!("Vehicle {} parked in slot {}.", plate, slot_id).green()
        ),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn vehicle_exit(facility: &mut Facility) -> Result<()> {
    let plate = prompt_non_empty("Plate")?;

    match facility.remove_vehicle(&plate) {
        Ok(fee) => println!(
            "{}",
            format!("Fee for vehicle {}: EUR {:.2}", plate, fee).green()
        ),
        Err(e) => println!("{}", e.to_string().red()),
    }
    Ok(())
}

fn show_occupancy(facility: &Facility) {
    let snapshot = facility.occupancy();
    println!(
        "{}",
        format!("Occupancy: {}/{}", snapshot.occupied, snapshot.total).bright_white()
    );

    let per_floor = facility.slots_per_floor() as usize;
    if per_floor == 0 {
        return;
    }
    for (floor, slots) in facility.slots().chunks(per_floor).enumerate() {
        let occupied = slots.iter().filter(|s| !s.is_free()).count();
        println!("  Floor {}: {}/{}", floor + 1, occupied, slots.len());
    }
}

fn list_clients(facility: &Facility) {
    if facility.clients().is_empty() {
        println!("{}", "No clients registered.".yellow());
        return;
    }
    for client in facility.clients() {
        println!(
            "ID: {}, Name: {}, Vehicles: {}",
            client.id,
            client.name,
            client.vehicles.len()
        );
    }
}

fn prompt_non_empty(label: &str) -> Result<String> {
    loop {
        let value: String = Input::new().with_prompt(label).interact_text()?;
        match validate_non_empty_string(label, &value) {
            Ok(()) => return Ok(value.trim().to_string()),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

fn prompt_vehicle_class() -> Result<VehicleClass> {
    let idx = Select::new()
        .with_prompt("Vehicle class")
        .items(&VehicleClass::ALL.map(|c| c.to_string()))
        .default(1)
        .interact()?;
    Ok(VehicleClass::ALL[idx])
}
