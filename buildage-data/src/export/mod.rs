//! Writers for the enriched feature list.
//!
//! Both exporters are total over their input: features missing the synthetic
//! properties still serialise, with empty cells in the CSV. [`write_exports`]
//! writes the pair together so a failure leaves previous outputs untouched.

use buildage_core::Feature;
use buildage_fs::{remove_utf8_file, rename_utf8_file};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info};
use thiserror::Error;

mod collection;
mod table;

pub use collection::{DEFAULT_GEOJSON_PATH, feature_collection, write_geojson, write_geojson_to};
pub use table::{CSV_HEADER, DEFAULT_CSV_PATH, write_csv, write_csv_to};

/// Errors raised while writing exports.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Creating the output file (or its parent directory) failed.
    #[error("failed to create {path}")]
    Create {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Serialising the feature collection failed.
    #[error("failed to serialise GeoJSON into {path}")]
    SerialiseGeoJson {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing a CSV record failed.
    #[error("failed to write CSV record into {path}")]
    WriteCsv {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// Writing or flushing the output failed.
    #[error("failed to write {path}")]
    Write {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Moving a staged file over its final path failed.
    #[error("failed to replace {path}")]
    Commit {
        /// Target file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

/// Suffix appended to an output path while it is being written.
pub const STAGING_SUFFIX: &str = ".partial";

fn staging_path(path: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{path}{STAGING_SUFFIX}"))
}

fn discard(path: &Utf8Path) {
    if let Err(err) = remove_utf8_file(path) {
        debug!("could not remove staged file {path}: {err}");
    }
}

/// Write the GeoJSON and CSV exports as a pair.
///
/// Both files are first written next to their targets with
/// [`STAGING_SUFFIX`] appended, then renamed into place. If either write
/// fails, the staged files are removed and existing outputs are left as they
/// were.
///
/// # Errors
///
/// Returns the first [`ExportError`] raised while writing or renaming.
pub fn write_exports(
    geojson: &Utf8Path,
    csv: &Utf8Path,
    features: &[Feature],
) -> Result<(), ExportError> {
    let staged_geojson = staging_path(geojson);
    let staged_csv = staging_path(csv);
    let written = write_geojson(&staged_geojson, features)
        .and_then(|()| write_csv(&staged_csv, features));
    if let Err(err) = written {
        discard(&staged_geojson);
        discard(&staged_csv);
        return Err(err);
    }

    for (staged, target) in [(&staged_geojson, geojson), (&staged_csv, csv)] {
        rename_utf8_file(staged, target).map_err(|source| {
            discard(&staged_geojson);
            discard(&staged_csv);
            ExportError::Commit {
                path: target.to_path_buf(),
                source,
            }
        })?;
        info!("wrote {} features to {target}", features.len());
    }
    Ok(())
}
