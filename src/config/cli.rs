use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "carpark")]
#[command(about = "Interactive parking facility management")]
pub struct CliConfig {
    /// TOML facility file applied before the menu starts
    #[arg(long)]
    pub config: Option<String>,

    /// Pre-configure this many floors (needs --slots-per-floor as well)
    #[arg(long)]
    pub floors: Option<u32>,

    /// Pre-configure this many slots per floor (needs --floors as well)
    #[arg(long)]
    pub slots_per_floor: Option<u32>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
