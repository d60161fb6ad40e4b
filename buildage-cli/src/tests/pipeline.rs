//! Pipeline tests driving the generation loop against stub sources.

use std::time::Duration;

use buildage_core::Feature;
use buildage_core::test_support::{sliver_way, square_way};
use buildage_data::overpass::FetchError;
use buildage_data::overpass::test_support::StubElementSource;
use rstest::{fixture, rstest};

use super::helpers::{OutputDir, assert_exports_agree, catalog, read_csv};
use super::*;

#[fixture]
fn source() -> StubElementSource {
    StubElementSource::default()
        .with_elements(
            "Altstadt",
            vec![square_way(1, 0.001), sliver_way(2), square_way(3, 0.002)],
        )
        .with_elements(
            "Chorweiler",
            (10..20).map(|id| square_way(id, 0.001)).collect(),
        )
}

fn years(features: &[Feature]) -> Vec<Option<i64>> {
    features.iter().map(Feature::year_built).collect()
}

#[rstest]
fn districts_are_processed_in_catalog_order(source: StubElementSource) {
    let features =
        run_pipeline(&catalog(), &source, 42, Duration::ZERO).expect("pipeline should succeed");

    assert_eq!(source.requested(), ["Altstadt", "Chorweiler"]);
    assert_eq!(features.len(), 12);
    let ids: Vec<_> = features.iter().take(3).map(Feature::id).collect();
    assert_eq!(ids, ["way/1", "way/3", "way/10"]);
}

#[rstest]
fn years_stay_within_their_district_range(source: StubElementSource) {
    let catalog = catalog();
    let features =
        run_pipeline(&catalog, &source, 42, Duration::ZERO).expect("pipeline should succeed");

    for feature in &features {
        let name = feature.district().expect("district assigned");
        let district = catalog.get(name).expect("district in catalog");
        let year = feature.year_built().expect("year assigned");
        let year = i32::try_from(year).expect("year fits i32");
        assert!(district.years().contains(year), "{year} outside {name}");
    }
}

#[rstest]
fn same_seed_reproduces_years(source: StubElementSource) {
    let run = |seed| run_pipeline(&catalog(), &source, seed, Duration::ZERO).expect("run");

    assert_eq!(years(&run(42)), years(&run(42)));
    assert_eq!(years(&run(-3)), years(&run(-3)));
    assert_ne!(years(&run(42)), years(&run(43)));
}

#[rstest]
fn fetch_failure_stops_the_loop() {
    let source = StubElementSource::default().with_error(
        "Altstadt",
        FetchError::Timeout {
            url: "http://overpass.test/api/interpreter".to_owned(),
            timeout_secs: 120,
        },
    );

    let err = run_pipeline(&catalog(), &source, 42, Duration::ZERO)
        .expect_err("fetch failure should propagate");

    match err {
        CliError::Fetch { district, source } => {
            assert_eq!(district, "Altstadt");
            assert!(matches!(source, FetchError::Timeout { .. }));
        }
        other => panic!("expected Fetch, found {other:?}"),
    }
    assert_eq!(source.requested(), ["Altstadt"]);
}

#[rstest]
fn generate_writes_matching_exports(source: StubElementSource) {
    let output = OutputDir::new();

    let outcome =
        generate(&output.config(42), &catalog(), &source).expect("generation should succeed");

    assert_eq!(outcome.feature_count, 12);
    assert_eq!(outcome.geojson, output.geojson());
    assert_eq!(outcome.csv, output.csv());
    assert_exports_agree(&output.geojson(), &output.csv());
    let rows = read_csv(&output.csv());
    assert!(rows.iter().all(|row| &row[0] != "way/2"));
}

#[rstest]
fn empty_result_writes_nothing() {
    let output = OutputDir::new();

    let err = generate(&output.config(42), &catalog(), &StubElementSource::default())
        .expect_err("empty result should fail");

    assert!(matches!(err, CliError::EmptyResult), "unexpected {err:?}");
    assert!(!output.geojson().exists());
    assert!(!output.csv().exists());
}

#[rstest]
fn late_fetch_failure_discards_earlier_districts() {
    let output = OutputDir::new();
    let source = StubElementSource::default()
        .with_elements("Altstadt", vec![square_way(1, 0.001)])
        .with_error(
            "Chorweiler",
            FetchError::Http {
                url: "http://overpass.test/api/interpreter".to_owned(),
                status: 504,
                message: "Gateway Timeout".to_owned(),
            },
        );

    let err = generate(&output.config(42), &catalog(), &source)
        .expect_err("fetch failure should abort");

    assert!(
        matches!(&err, CliError::Fetch { district, .. } if district == "Chorweiler"),
        "unexpected {err:?}"
    );
    assert!(!output.geojson().exists());
    assert!(!output.csv().exists());
}

#[rstest]
fn csv_write_failure_leaves_no_geojson(source: StubElementSource) {
    let output = OutputDir::new();
    let blocker = output.geojson().with_file_name("blocker");
    std::fs::create_dir_all(output.geojson().parent().expect("parent")).expect("create dir");
    std::fs::write(&blocker, "").expect("seed blocking file");
    let config = GenerateConfig {
        csv_out: blocker.join("synthetic_building_age.csv"),
        ..output.config(42)
    };

    let err = generate(&config, &catalog(), &source).expect_err("CSV cannot be created");

    assert!(matches!(err, CliError::Export(_)), "unexpected {err:?}");
    assert!(!output.geojson().exists());
    let leftovers: Vec<_> = std::fs::read_dir(blocker.parent().expect("parent"))
        .expect("list exports")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(leftovers, ["blocker"]);
}
