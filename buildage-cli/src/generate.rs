//! Argument layering and resolved configuration for a generation run.

use std::time::Duration;

use buildage_data::export::{DEFAULT_CSV_PATH, DEFAULT_GEOJSON_PATH};
use buildage_data::overpass::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpOverpassSourceConfig,
};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CSV_OUT, ARG_DELAY_MS, ARG_ENDPOINT, ARG_GEOJSON_OUT, ARG_TIMEOUT_SECS, ARG_USER_AGENT,
    CliError, ENV_CSV_OUT, ENV_ENDPOINT, ENV_TIMEOUT_SECS, ENV_USER_AGENT,
};

/// Seed used when none is given.
pub const DEFAULT_SEED: i64 = 42;

/// Pause between district requests, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1_000;

/// CLI arguments for a generation run.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "buildage",
    about = "Generate synthetic building-age footprints for Cologne districts",
    long_about = "Fetch building footprints for each configured district from \
                  an Overpass endpoint, assign every footprint a synthetic \
                  construction year drawn from the district's range, and \
                  write the result as GeoJSON and CSV. The same seed and \
                  upstream data always produce the same years.",
    version
)]
#[ortho_config(prefix = "BUILDAGE")]
pub struct GenerateArgs {
    /// Seed for the year generator (may be negative).
    #[arg(value_name = "SEED", allow_negative_numbers = true)]
    #[serde(default)]
    pub seed: Option<i64>,
    /// Overpass interpreter URL.
    #[arg(long = ARG_ENDPOINT, value_name = "url")]
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Pause between district requests in milliseconds.
    #[arg(long = ARG_DELAY_MS, value_name = "ms")]
    #[serde(default)]
    pub delay_ms: Option<u64>,
    /// Output path for the GeoJSON feature collection.
    #[arg(long = ARG_GEOJSON_OUT, value_name = "path")]
    #[serde(default)]
    pub geojson_out: Option<Utf8PathBuf>,
    /// Output path for the CSV table.
    #[arg(long = ARG_CSV_OUT, value_name = "path")]
    #[serde(default)]
    pub csv_out: Option<Utf8PathBuf>,
    /// User agent sent with Overpass requests.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl GenerateArgs {
    /// Merge configuration files and environment variables beneath the CLI
    /// values and resolve defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Configuration`] when layering fails and
    /// [`CliError::InvalidArgument`] when a merged value is unusable.
    pub fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GenerateConfig::try_from(merged)
    }
}

/// Resolved configuration for a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Seed for the year generator.
    pub seed: i64,
    /// Overpass interpreter URL.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Pause between district requests.
    pub delay: Duration,
    /// User agent for Overpass requests.
    pub user_agent: String,
    /// GeoJSON output path.
    pub geojson_out: Utf8PathBuf,
    /// CSV output path.
    pub csv_out: Utf8PathBuf,
}

impl GenerateConfig {
    /// Client configuration for [`buildage_data::overpass::HttpOverpassSource`].
    #[must_use]
    pub fn source_config(&self) -> HttpOverpassSourceConfig {
        HttpOverpassSourceConfig::new(self.endpoint.clone())
            .with_timeout(self.timeout)
            .with_user_agent(self.user_agent.clone())
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            geojson_out: Utf8PathBuf::from(DEFAULT_GEOJSON_PATH),
            csv_out: Utf8PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = CliError;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        let defaults = Self::default();

        let endpoint = args.endpoint.unwrap_or(defaults.endpoint);
        if endpoint.trim().is_empty() {
            return Err(CliError::InvalidArgument {
                field: ARG_ENDPOINT,
                env: ENV_ENDPOINT,
                reason: "must not be empty",
            });
        }

        let timeout = args.timeout_secs.map_or(defaults.timeout, Duration::from_secs);
        if timeout.is_zero() {
            return Err(CliError::InvalidArgument {
                field: ARG_TIMEOUT_SECS,
                env: ENV_TIMEOUT_SECS,
                reason: "must be greater than zero",
            });
        }

        let user_agent = args.user_agent.unwrap_or(defaults.user_agent);
        if user_agent.trim().is_empty() {
            return Err(CliError::InvalidArgument {
                field: ARG_USER_AGENT,
                env: ENV_USER_AGENT,
                reason: "must not be empty",
            });
        }

        let geojson_out = args.geojson_out.unwrap_or(defaults.geojson_out);
        let csv_out = args.csv_out.unwrap_or(defaults.csv_out);
        if geojson_out == csv_out {
            return Err(CliError::InvalidArgument {
                field: ARG_CSV_OUT,
                env: ENV_CSV_OUT,
                reason: "must differ from the GeoJSON output path",
            });
        }

        Ok(Self {
            seed: args.seed.unwrap_or(defaults.seed),
            endpoint,
            timeout,
            delay: args.delay_ms.map_or(defaults.delay, Duration::from_millis),
            user_agent,
            geojson_out,
            csv_out,
        })
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<GenerateConfig, CliError> {
    let merged = GenerateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    GenerateConfig::try_from(merged)
}
