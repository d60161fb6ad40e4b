//! Behavioural tests for writing GeoJSON and CSV exports.

use std::cell::RefCell;
use std::fs;

use buildage_core::test_support::{district, sliver_way, square_way};
use buildage_core::{Feature, enrich_features, translate_elements};
use buildage_data::export::{write_csv, write_geojson};
use buildage_data::overpass::ElementSource;
use buildage_data::overpass::test_support::StubElementSource;
use camino::{Utf8Path, Utf8PathBuf};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

/// Scenario state shared between steps.
struct ExportWorld {
    dir: TempDir,
    source: RefCell<StubElementSource>,
    features: RefCell<Vec<Feature>>,
}

impl ExportWorld {
    fn root(&self) -> &Utf8Path {
        Utf8Path::from_path(self.dir.path()).expect("temp dir path is UTF-8")
    }

    fn geojson_path(&self) -> Utf8PathBuf {
        self.root().join("out/maps/buildings.geojson")
    }

    fn csv_path(&self) -> Utf8PathBuf {
        self.root().join("out/tables/buildings.csv")
    }

    fn geojson(&self) -> serde_json::Value {
        let text = fs::read_to_string(self.geojson_path()).expect("read GeoJSON");
        serde_json::from_str(&text).expect("GeoJSON parses")
    }

    fn csv_rows(&self) -> Vec<csv::StringRecord> {
        let mut reader = csv::Reader::from_path(self.csv_path()).expect("open CSV");
        reader
            .records()
            .collect::<Result<_, _>>()
            .expect("CSV rows parse")
    }
}

#[fixture]
fn world() -> ExportWorld {
    ExportWorld {
        dir: TempDir::new().expect("tempdir"),
        source: RefCell::new(StubElementSource::default()),
        features: RefCell::new(Vec::new()),
    }
}

#[given("a stub source with three ways for Altstadt")]
fn stub_source(#[from(world)] world: &ExportWorld) {
    let source = StubElementSource::default().with_elements(
        "Altstadt",
        vec![square_way(1, 0.001), sliver_way(2), square_way(3, 0.002)],
    );
    world.source.replace(source);
}

#[given("stale export files already exist")]
fn stale_exports(#[from(world)] world: &ExportWorld) {
    for path in [world.geojson_path(), world.csv_path()] {
        let parent = path.parent().expect("export path has a parent");
        fs::create_dir_all(parent).expect("create stale directory");
        fs::write(&path, "stale\nstale\nstale\nstale\nstale\n").expect("write stale file");
    }
}

#[when("I fetch, translate, and enrich Altstadt with seed 42")]
fn run_stages(#[from(world)] world: &ExportWorld) {
    let altstadt = district("Altstadt", 1850, 1950);
    let document = world
        .source
        .borrow()
        .fetch_elements(&altstadt)
        .expect("stubbed fetch succeeds");
    let translation = translate_elements(&document.elements);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let features = enrich_features(&altstadt, translation.features, &mut rng);
    world.features.replace(features);
}

#[when("I export the features into a nested output directory")]
fn export_features(#[from(world)] world: &ExportWorld) {
    let features = world.features.borrow();
    write_geojson(&world.geojson_path(), &features).expect("GeoJSON export succeeds");
    write_csv(&world.csv_path(), &features).expect("CSV export succeeds");
}

#[then("the GeoJSON file holds 2 polygon features")]
fn geojson_features(#[from(world)] world: &ExportWorld) {
    let collection = world.geojson();
    let features = collection["features"].as_array().expect("features array");
    assert_eq!(features.len(), 2);
    for feature in features {
        assert_eq!(feature["geometry"]["type"], "Polygon");
    }
}

#[then("the CSV file holds 2 rows after the header")]
fn csv_row_count(#[from(world)] world: &ExportWorld) {
    assert_eq!(world.csv_rows().len(), 2);
}

#[then("the CSV rows match the GeoJSON features")]
fn exports_agree(#[from(world)] world: &ExportWorld) {
    let collection = world.geojson();
    let features = collection["features"].as_array().expect("features array");
    let rows = world.csv_rows();
    assert_eq!(rows.len(), features.len());
    for (row, feature) in rows.iter().zip(features) {
        let properties = &feature["properties"];
        assert_eq!(Some(&row[0]), feature["id"].as_str());
        assert_eq!(Some(&row[1]), properties["district"].as_str());
        assert_eq!(row[2], properties["year_built"].to_string());
        assert_eq!(Some(&row[3]), properties["year_range"].as_str());
    }
    assert!(
        rows.iter().all(|row| &row[0] != "way/2"),
        "sliver should be absent"
    );
}

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/export.feature", name = $title)]
        fn $fn_name(#[from(world)] world: ExportWorld) {
            let _ = world;
        }
    };
}

register_scenario!(writing_both_exports, "writing both exports for fetched footprints");
register_scenario!(overwriting_exports, "overwriting previous exports");
