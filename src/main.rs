//! Generates the SoCal monthly climatology artifact.
//!
//! Reads the dataset embedded in `data/data.js`, aggregates it per scenario
//! and calendar month, converts units, and writes the result to
//! `data/climate_lab_transformed.json`.

use climatology_core::aggregate::ClimatologyAggregator;
use climatology_core::dataset::extract_dataset;
use log::{error, info, warn};
use std::fs;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SOURCE_PATH: &str = "data/data.js";
const OUTPUT_PATH: &str = "data/climate_lab_transformed.json";

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let source = match fs::read_to_string(SOURCE_PATH) {
        Ok(source) => source,
        Err(e) => {
            error!("failed to read {}: {}", SOURCE_PATH, e);
            return ExitCode::FAILURE;
        }
    };

    let dataset = match extract_dataset(&source) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "parsed {} historical and {} future records",
        dataset.socal_cloudmap_monthly.len(),
        dataset.future_socal_cloudmap_monthly.len()
    );

    let mut aggregator = ClimatologyAggregator::new();
    let accumulated = aggregator
        .add_historical(&dataset.socal_cloudmap_monthly)
        .and_then(|()| aggregator.add_future(&dataset.future_socal_cloudmap_monthly));
    if let Err(e) = accumulated {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    if aggregator.dropped_records() > 0 {
        warn!(
            "dropped {} future records carrying an unrecognised scenario",
            aggregator.dropped_records()
        );
    }

    let climatology = aggregator.build();
    let serialised = match serde_json::to_vec_pretty(&climatology) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("failed to serialise climatology: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = fs::write(OUTPUT_PATH, serialised) {
        error!("failed to write {}: {}", OUTPUT_PATH, e);
        return ExitCode::FAILURE;
    }

    info!("wrote monthly climatology to {}", OUTPUT_PATH);
    ExitCode::SUCCESS
}
