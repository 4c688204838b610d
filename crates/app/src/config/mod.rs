use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tripsplit.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Trip document (JSON) as stored by the planner.
    pub trip: String,
    /// Settings document (JSON) with family members and currencies.
    pub settings: String,
    pub format: OutputFormat,
    pub tolerance: f64,
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            trip: "data/trip.json".to_string(),
            settings: "data/settings.json".to_string(),
            format: OutputFormat::Text,
            tolerance: engine::DEFAULT_TOLERANCE,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Who owes whom, per currency.
    Settle,
    /// Every expense of the trip, sorted by date.
    Expenses,
    /// Total spent per currency.
    Totals,
    /// Total spent per currency on one itinerary day.
    Day {
        /// Itinerary index of the day.
        index: u32,
    },
}

#[derive(Debug, Parser)]
#[command(name = "tripsplit", about = "Split shared trip expenses per currency")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the trip document path.
    #[arg(long)]
    trip: Option<String>,
    /// Override the settings document path.
    #[arg(long)]
    settings: Option<String>,
    /// Override the output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Override the settlement tolerance.
    #[arg(long)]
    tolerance: Option<f64>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

pub fn load() -> Result<(AppConfig, Command)> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("TRIPSPLIT"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(trip) = args.trip {
        settings.trip = trip;
    }
    if let Some(path) = args.settings {
        settings.settings = path;
    }
    if let Some(format) = args.format {
        settings.format = format;
    }
    if let Some(tolerance) = args.tolerance {
        settings.tolerance = tolerance;
    }
    if let Some(level) = args.level {
        settings.level = level;
    }

    Ok((settings, args.command))
}
