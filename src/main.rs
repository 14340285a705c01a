//! # Sample Data Entry Point
//!
//! Seeds the configured database with sample data inside one transaction.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rideshare::{
    config::{AppConfig, ConfigLoader},
    db,
    seeds::{count_records, seed_sample_data},
    telemetry,
};
use tracing::Instrument;

#[derive(Parser)]
#[command(name = "sample-data")]
#[command(about = "Populate the database with rideshare and food delivery sample data")]
struct Cli {
    /// Apply pending migrations before seeding
    #[arg(long)]
    migrate: bool,

    /// Directory holding the layered `.env` files (defaults to the working directory)
    #[arg(long)]
    env_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loader = match cli.env_dir {
        Some(dir) => ConfigLoader::with_base_dir(dir),
        None => ConfigLoader::new(),
    };
    let config = match loader.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = telemetry::init_tracing(&config) {
        eprintln!("Warning: {}", err);
    }
    if let Ok(redacted_json) = config.redacted_json() {
        log::debug!("Configuration: {}", redacted_json);
    }

    let span = tracing::info_span!("sample_data", profile = %config.profile);
    run(&config, cli.migrate).instrument(span).await
}

async fn run(config: &AppConfig, migrate: bool) -> ExitCode {
    let db = match db::init_pool(config).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("Could not connect to the database: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    if migrate
        && let Err(err) = db::run_migrations(&db).await
    {
        eprintln!("Could not apply migrations: {}", err);
        return ExitCode::FAILURE;
    }

    println!("Creating sample data...");
    match seed_sample_data(&db).await {
        Ok(summary) => {
            log::info!(
                "Seeded driver {} with trip pool {} and delivery trip {}",
                summary.driver_id,
                summary.trip_pool_id,
                summary.delivery_trip_id
            );
            if let Ok(counts) = count_records(&db).await {
                log::info!("Row counts after seeding: {:?}", counts);
            }
            println!("Finished creating sample data.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("I found an error. Aborting...");
            println!("{}", err);
            if err.is_unique_violation() {
                println!("The database already contains sample data; reset it before seeding again.");
            }
            ExitCode::FAILURE
        }
    }
}
