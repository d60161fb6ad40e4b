//! Closed-polygon building features and their property mapping.

use geo::{Coord, LineString};

use crate::enrich::{DISTRICT_KEY, YEAR_BUILT_KEY, YEAR_RANGE_KEY};

/// Free-form feature properties (string key to scalar JSON value).
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// A single building footprint with one closed outer ring.
///
/// The ring is closed on construction: when the first and last vertices
/// differ, a copy of the first vertex is appended.
///
/// # Examples
///
/// ```
/// use buildage_core::{Feature, Properties};
/// use geo::Coord;
///
/// let feature = Feature::new(
///     "way/1",
///     vec![
///         Coord { x: 0.0, y: 0.0 },
///         Coord { x: 1.0, y: 0.0 },
///         Coord { x: 1.0, y: 1.0 },
///     ],
///     Properties::new(),
/// );
/// assert_eq!(feature.ring().0.len(), 4);
/// assert!(feature.ring().is_closed());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: String,
    ring: LineString<f64>,
    properties: Properties,
}

impl Feature {
    /// Build a feature, closing the ring when necessary.
    #[must_use]
    pub fn new(id: impl Into<String>, vertices: Vec<Coord<f64>>, properties: Properties) -> Self {
        let mut ring = LineString::new(vertices);
        ring.close();
        Self {
            id: id.into(),
            ring,
            properties,
        }
    }

    /// Feature identifier, e.g. `way/123`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Closed outer ring with `x = longitude`, `y = latitude`.
    #[must_use]
    pub const fn ring(&self) -> &LineString<f64> {
        &self.ring
    }

    /// Property mapping.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Mutable property mapping.
    pub const fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Owning district name, present once the feature has been enriched.
    #[must_use]
    pub fn district(&self) -> Option<&str> {
        self.properties
            .get(DISTRICT_KEY)
            .and_then(serde_json::Value::as_str)
    }

    /// Synthetic construction year, present once the feature has been enriched.
    #[must_use]
    pub fn year_built(&self) -> Option<i64> {
        self.properties
            .get(YEAR_BUILT_KEY)
            .and_then(serde_json::Value::as_i64)
    }

    /// Year range label (`low-high`), present once the feature has been enriched.
    #[must_use]
    pub fn year_range(&self) -> Option<&str> {
        self.properties
            .get(YEAR_RANGE_KEY)
            .and_then(serde_json::Value::as_str)
    }
}
