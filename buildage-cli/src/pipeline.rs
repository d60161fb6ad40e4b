//! Sequential fetch, translate, enrich, and export loop.

use std::thread;
use std::time::Duration;

use buildage_core::{Catalog, District, Feature, enrich_features, translate_elements};
use buildage_data::export::write_exports;
use buildage_data::overpass::ElementSource;
use camino::Utf8PathBuf;
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{CliError, GenerateConfig};

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    /// Number of features written to each export.
    pub feature_count: usize,
    /// Path of the written GeoJSON file.
    pub geojson: Utf8PathBuf,
    /// Path of the written CSV file.
    pub csv: Utf8PathBuf,
}

/// Fetch and enrich every district in catalog order, then write both exports.
///
/// The generator is seeded once, before the first district. Any fetch failure
/// aborts the run before anything is written, as does an empty result.
///
/// # Errors
///
/// Returns [`CliError::Fetch`] on the first failed request,
/// [`CliError::EmptyResult`] when no district yields a feature, and
/// [`CliError::Export`] when writing either file fails. Outputs are replaced
/// only once both files have been written.
pub fn generate(
    config: &GenerateConfig,
    catalog: &Catalog,
    source: &dyn ElementSource,
) -> Result<GenerateOutcome, CliError> {
    let features = run_pipeline(catalog, source, config.seed, config.delay)?;
    if features.is_empty() {
        return Err(CliError::EmptyResult);
    }
    write_exports(&config.geojson_out, &config.csv_out, &features)?;
    info!(
        "done: {} features from {} districts",
        features.len(),
        catalog.len()
    );
    Ok(GenerateOutcome {
        feature_count: features.len(),
        geojson: config.geojson_out.clone(),
        csv: config.csv_out.clone(),
    })
}

/// Accumulate enriched features for every district without writing anything.
///
/// `delay` is slept between consecutive requests, never after the last one.
///
/// # Errors
///
/// Returns [`CliError::Fetch`] naming the first district whose request failed.
pub fn run_pipeline<S: ElementSource + ?Sized>(
    catalog: &Catalog,
    source: &S,
    seed: i64,
    delay: Duration,
) -> Result<Vec<Feature>, CliError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.cast_unsigned());
    let mut features = Vec::new();
    let mut districts = catalog.iter().peekable();
    while let Some(district) = districts.next() {
        features.extend(process_district(district, source, &mut rng)?);
        if districts.peek().is_some() && !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(features)
}

fn process_district<S: ElementSource + ?Sized, R: Rng + ?Sized>(
    district: &District,
    source: &S,
    rng: &mut R,
) -> Result<Vec<Feature>, CliError> {
    info!("fetching buildings for {}", district.name());
    let document = source
        .fetch_elements(district)
        .map_err(|err| CliError::Fetch {
            district: district.name().to_owned(),
            source: err,
        })?;
    let translation = translate_elements(&document.elements);
    if translation.skipped > 0 {
        debug!(
            "{}: skipped {} of {} elements",
            district.name(),
            translation.skipped,
            document.elements.len()
        );
    }
    let features = enrich_features(district, translation.features, rng);
    if features.is_empty() {
        warn!("{}: no building footprints returned", district.name());
    } else {
        info!(
            "{}: {} buildings, years {}",
            district.name(),
            features.len(),
            district.years()
        );
    }
    Ok(features)
}
