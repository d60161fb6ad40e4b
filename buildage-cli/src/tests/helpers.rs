//! Test helpers for temporary output locations and stub catalogs.

use buildage_core::test_support::district;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use super::*;

/// Temporary directory holding both export paths.
pub(super) struct OutputDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl OutputDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    pub(super) fn geojson(&self) -> Utf8PathBuf {
        self.root.join("exports/synthetic_building_age.geojson")
    }

    pub(super) fn csv(&self) -> Utf8PathBuf {
        self.root.join("exports/synthetic_building_age.csv")
    }

    pub(super) fn config(&self, seed: i64) -> GenerateConfig {
        GenerateConfig {
            seed,
            delay: std::time::Duration::ZERO,
            geojson_out: self.geojson(),
            csv_out: self.csv(),
            ..GenerateConfig::default()
        }
    }
}

/// Two-district catalog with disjoint year ranges.
pub(super) fn catalog() -> Catalog {
    Catalog::new(vec![
        district("Altstadt", 1850, 1950),
        district("Chorweiler", 1970, 2000),
    ])
    .expect("fixture catalog is valid")
}

pub(super) fn read_geojson(path: &Utf8Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("read GeoJSON");
    serde_json::from_str(&text).expect("GeoJSON parses")
}

pub(super) fn read_csv(path: &Utf8Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).expect("open CSV");
    reader
        .records()
        .collect::<Result<_, _>>()
        .expect("CSV rows parse")
}

/// Assert the CSV rows mirror the GeoJSON features one to one.
pub(super) fn assert_exports_agree(geojson: &Utf8Path, csv: &Utf8Path) {
    let collection = read_geojson(geojson);
    let features = collection["features"].as_array().expect("features array");
    let rows = read_csv(csv);
    assert_eq!(rows.len(), features.len());
    for (row, feature) in rows.iter().zip(features) {
        let properties = &feature["properties"];
        assert_eq!(Some(&row[0]), feature["id"].as_str());
        assert_eq!(Some(&row[1]), properties["district"].as_str());
        assert_eq!(row[2], properties["year_built"].to_string());
        assert_eq!(Some(&row[3]), properties["year_range"].as_str());
    }
}
