use anyhow::Context;
use clap::Parser;

use carpark::app::run_menu;
use carpark::utils::logger;
use carpark::{CliConfig, Facility, FacilityFile};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting carpark CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut facility = Facility::new();

    if let Some(path) = &config.config {
        let file = FacilityFile::from_file(path)
            .with_context(|| format!("failed to load facility file {}", path))?;
        file.apply(&mut facility)
            .context("failed to apply facility file")?;
    } else if let (Some(floors), Some(slots_per_floor)) = (config.floors, config.slots_per_floor) {
        facility
            .configure(floors, slots_per_floor)
            .context("failed to configure facility")?;
    }

    if config.verbose {
        tracing::debug!(
            "initial facility state: {}",
            serde_json::to_string(&facility)?
        );
    }

    run_menu(&mut facility)
}
