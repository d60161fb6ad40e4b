//! Command-line interface for generating synthetic building-age exports.
#![forbid(unsafe_code)]

use buildage_core::Catalog;
use buildage_data::overpass::HttpOverpassSource;
use clap::Parser;

mod error;
mod generate;
mod pipeline;

pub use error::CliError;
pub use generate::{DEFAULT_DELAY_MS, DEFAULT_SEED, GenerateArgs, GenerateConfig};
pub use pipeline::{GenerateOutcome, generate, run_pipeline};

const ARG_ENDPOINT: &str = "endpoint";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_DELAY_MS: &str = "delay-ms";
const ARG_GEOJSON_OUT: &str = "geojson-out";
const ARG_CSV_OUT: &str = "csv-out";
const ARG_USER_AGENT: &str = "user-agent";
const ENV_ENDPOINT: &str = "BUILDAGE_CMDS_BUILDAGE_ENDPOINT";
const ENV_TIMEOUT_SECS: &str = "BUILDAGE_CMDS_BUILDAGE_TIMEOUT_SECS";
const ENV_CSV_OUT: &str = "BUILDAGE_CMDS_BUILDAGE_CSV_OUT";
const ENV_USER_AGENT: &str = "BUILDAGE_CMDS_BUILDAGE_USER_AGENT";

/// Run the buildage CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError::ArgumentParsing`] for usage errors, before any request
/// is made, and the errors of [`generate`] otherwise.
pub fn run() -> Result<(), CliError> {
    let args = GenerateArgs::try_parse().map_err(CliError::ArgumentParsing)?;
    let config = args.into_config()?;
    let source = HttpOverpassSource::with_config(config.source_config()).map_err(|source| {
        CliError::BuildClient {
            endpoint: config.endpoint.clone(),
            source,
        }
    })?;
    generate(&config, &Catalog::cologne(), &source)?;
    Ok(())
}

#[cfg(test)]
mod tests;
