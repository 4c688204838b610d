use std::io::{self, Write};
use std::process::ExitCode;

use crate::config::{AppConfig, Command, OutputFormat};
use engine::{Engine, Settings, TripData};

mod config;
mod documents;
mod error;
mod export;
mod render;

use crate::error::Result;

fn main() -> ExitCode {
    let (settings, command) = match config::load() {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(format!(
            "tripsplit={level},engine={level}",
            level = settings.level
        ))
        .init();

    match run(&settings, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig, command: Command) -> Result<()> {
    let trip: TripData = documents::load(&config.trip)?;
    let trip_settings: Settings = documents::load(&config.settings)?;
    tracing::info!(
        days = trip.days.len(),
        members = trip_settings.family_members.len(),
        "loaded trip"
    );

    let engine = Engine::builder()
        .settings(trip_settings)
        .tolerance(config.tolerance)
        .build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Settle => {
            let summary = engine.summarize(&trip)?;
            if !summary.skipped.is_empty() {
                tracing::warn!(
                    skipped = summary.skipped.len(),
                    "some expenses were left out of the settlement"
                );
            }
            match config.format {
                OutputFormat::Text => render::settlements(&mut out, &summary.settlements)?,
                OutputFormat::Json => serde_json::to_writer_pretty(&mut out, &summary.settlements)?,
                OutputFormat::Csv => export::settlements(&mut out, &summary.settlements)?,
            }
        }
        Command::Expenses => {
            let aggregation = engine.expenses(&trip);
            match config.format {
                OutputFormat::Text => render::expenses(&mut out, &aggregation.expenses)?,
                OutputFormat::Json => serde_json::to_writer_pretty(&mut out, &aggregation)?,
                OutputFormat::Csv => export::expenses(&mut out, &aggregation.expenses)?,
            }
        }
        Command::Totals => {
            let totals = engine::totals_by_currency(&engine.expenses(&trip).expenses);
            write_totals(&mut out, config.format, &totals)?;
        }
        Command::Day { index } => {
            let totals = engine.daily_totals(&trip, index)?;
            write_totals(&mut out, config.format, &totals)?;
        }
    }

    if config.format == OutputFormat::Json {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_totals(
    out: &mut impl Write,
    format: OutputFormat,
    totals: &[engine::CurrencyTotal],
) -> Result<()> {
    match format {
        OutputFormat::Text => render::totals(out, totals),
        OutputFormat::Json => Ok(serde_json::to_writer_pretty(out, totals)?),
        OutputFormat::Csv => export::totals(out, totals),
    }
}
