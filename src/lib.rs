//! Facade crate for buildage, a synthetic building-age generator.
//!
//! This crate re-exports the core domain types and, behind the `http` feature,
//! the Overpass fetcher and the GeoJSON/CSV exporters.

#![forbid(unsafe_code)]

pub use buildage_core::{
    BoundingBox, Catalog, CatalogError, District, DistrictError, Feature, Properties, RawElement,
    Translation, YearRange, assign_year, centroid, enrich_features, translate_elements,
};

#[cfg(feature = "http")]
pub use buildage_data::export::{ExportError, write_csv, write_exports, write_geojson};

#[cfg(feature = "http")]
pub use buildage_data::overpass::{
    ElementSource, FetchError, HttpOverpassSource, HttpOverpassSourceConfig,
};
