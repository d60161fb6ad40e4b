//! Flat CSV export with one row per feature.

use std::io::Write;

use buildage_core::Feature;
use buildage_core::enrich::{DISTRICT_KEY, YEAR_BUILT_KEY, YEAR_RANGE_KEY};
use buildage_fs::create_utf8_file;
use camino::Utf8Path;
use csv::{Terminator, WriterBuilder};
use log::debug;
use serde_json::Value;

use super::ExportError;

/// Default CSV output path, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "synthetic_building_age.csv";

/// Column names, in output order.
pub const CSV_HEADER: [&str; 4] = ["id", "district", "year_built", "year_range"];

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Write the header and one row per feature to `writer`.
///
/// Rows are `\n`-terminated regardless of platform.
pub fn write_csv_to<W: Write>(writer: W, features: &[Feature]) -> Result<(), csv::Error> {
    let mut table = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    table.write_record(CSV_HEADER)?;
    for feature in features {
        let properties = feature.properties();
        table.write_record([
            feature.id().to_owned(),
            cell(properties.get(DISTRICT_KEY)),
            cell(properties.get(YEAR_BUILT_KEY)),
            cell(properties.get(YEAR_RANGE_KEY)),
        ])?;
    }
    table.flush()?;
    Ok(())
}

/// Write the CSV export to `path`, replacing any existing file.
pub fn write_csv(path: &Utf8Path, features: &[Feature]) -> Result<(), ExportError> {
    let file = create_utf8_file(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(file, features).map_err(|source| ExportError::WriteCsv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} rows to {path}", features.len());
    Ok(())
}
