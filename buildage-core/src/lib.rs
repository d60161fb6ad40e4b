//! Core domain types for buildage.
//!
//! The crate covers the pure stages of the synthetic building-age pipeline:
//! - [`Catalog`] and [`District`] describe where to look and which years to
//!   assign;
//! - [`translate_elements`] turns raw upstream [`RawElement`]s into closed
//!   polygon [`Feature`]s;
//! - [`enrich_features`] attaches a synthetic `year_built`, provenance, and a
//!   vertex-mean centroid to each feature.
//!
//! Nothing here performs I/O. Randomness is injected through an explicit
//! [`rand::Rng`] handle so callers control seeding and draw order.

#![forbid(unsafe_code)]

mod district;
mod element;
pub mod enrich;
mod feature;
mod translate;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use district::{
    BoundingBox, Catalog, CatalogError, DEFAULT_FEATURE_LIMIT, District, DistrictError, YearRange,
};
pub use element::{ElementPoint, RawElement, WAY_TYPE};
pub use enrich::{assign_year, centroid, enrich_features};
pub use feature::{Feature, Properties};
pub use translate::{MIN_VERTICES, Translation, translate_elements};
