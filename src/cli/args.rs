//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bomcost",
    about = "Price a PCB bill of materials against the DigiKey catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a BOM and print the report
    Price(PriceArgs),

    /// Inspect or clear the on-disk catalog cache
    #[command(subcommand)]
    Cache(CacheCommands),
}

#[derive(clap::Args, Debug)]
pub struct PriceArgs {
    /// Path to the BOM CSV export
    #[arg(long, short = 'b')]
    pub bom: PathBuf,

    /// Number of boards to build
    #[arg(long, default_value_t = 1)]
    pub boards: u32,

    /// Write a CM-ready spreadsheet to this path
    #[arg(long, short = 's')]
    pub sheet: Option<PathBuf>,

    /// DigiKey API client ID
    #[arg(long, env = "DIGIKEY_CLIENT_ID", hide_env_values = true)]
    pub client_id: String,

    /// DigiKey API client secret
    #[arg(long, env = "DIGIKEY_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,
}

#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Delete the cached token and all cached search responses
    Clear,

    /// Show cache location and entry counts
    Status,
}
