//! Synthetic year assignment and centroid enrichment.
//!
//! The random generator is passed in explicitly so enrichment stays a pure
//! function of `(district, features, generator state)`. One value is drawn per
//! feature, in input order.

use geo::{Coord, LineString};
use rand::Rng;

use crate::{District, Feature, YearRange};

/// Owning district name.
pub const DISTRICT_KEY: &str = "district";
/// Synthetic construction year.
pub const YEAR_BUILT_KEY: &str = "year_built";
/// Provenance label, `synthetic:<district>`.
pub const YEAR_SOURCE_KEY: &str = "year_source";
/// Year range label, `<low>-<high>`.
pub const YEAR_RANGE_KEY: &str = "year_range";
/// Centroid longitude.
pub const CENTROID_LON_KEY: &str = "centroid_lon";
/// Centroid latitude.
pub const CENTROID_LAT_KEY: &str = "centroid_lat";

/// Unweighted mean of every stored ring vertex.
///
/// The closing duplicate vertex is included, so this is not the area
/// centroid. An empty ring yields `(0.0, 0.0)`.
///
/// # Examples
///
/// ```
/// use buildage_core::centroid;
/// use geo::{Coord, LineString};
///
/// let ring = LineString::from(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
/// let centre = centroid(&ring);
/// assert!((centre.x - 0.8).abs() < 1e-12);
/// assert!((centre.y - 0.8).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "Vertex averaging is inherently floating point; ring sizes are far below 2^52"
)]
pub fn centroid(ring: &LineString<f64>) -> Coord<f64> {
    let count = ring.0.len();
    if count == 0 {
        return Coord { x: 0.0, y: 0.0 };
    }
    let sum = ring.coords().fold(Coord { x: 0.0, y: 0.0 }, |acc, coord| Coord {
        x: acc.x + coord.x,
        y: acc.y + coord.y,
    });
    let n = count as f64;
    Coord {
        x: sum.x / n,
        y: sum.y / n,
    }
}

/// Draw a year uniformly from `range`, inclusive of both ends.
pub fn assign_year<R: Rng + ?Sized>(range: YearRange, rng: &mut R) -> i32 {
    rng.gen_range(range.low()..=range.high())
}

/// Attach synthetic year, provenance, and centroid properties to `features`.
///
/// Existing tags are preserved; the synthetic keys overwrite any upstream
/// value of the same name.
pub fn enrich_features<R: Rng + ?Sized>(
    district: &District,
    features: Vec<Feature>,
    rng: &mut R,
) -> Vec<Feature> {
    let years = district.years();
    let year_source = district.year_source();
    let year_range = years.to_string();
    features
        .into_iter()
        .map(|mut feature| {
            let centre = centroid(feature.ring());
            let year = assign_year(years, rng);
            let properties = feature.properties_mut();
            properties.insert(DISTRICT_KEY.to_owned(), district.name().into());
            properties.insert(YEAR_BUILT_KEY.to_owned(), year.into());
            properties.insert(YEAR_SOURCE_KEY.to_owned(), year_source.clone().into());
            properties.insert(YEAR_RANGE_KEY.to_owned(), year_range.clone().into());
            properties.insert(CENTROID_LON_KEY.to_owned(), centre.x.into());
            properties.insert(CENTROID_LAT_KEY.to_owned(), centre.y.into());
            feature
        })
        .collect()
}
