//! District definitions and the catalog the pipeline iterates over.
//!
//! A [`District`] pairs a bounding box with the inclusive range of synthetic
//! construction years assigned to footprints found inside it. Constructors
//! validate their input so that downstream stages can rely on
//! `south < north`, `west < east`, and `low <= high`.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// Default number of elements requested per district.
pub const DEFAULT_FEATURE_LIMIT: u32 = 2000;

/// Axis-aligned bounding box in WGS84 decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern latitude.
    pub south: f64,
    /// Western longitude.
    pub west: f64,
    /// Northern latitude.
    pub north: f64,
    /// Eastern longitude.
    pub east: f64,
}

impl BoundingBox {
    /// Construct a bounding box from `(south, west, north, east)`.
    ///
    /// No validation happens here; [`District::new`] rejects inverted or
    /// non-finite boxes.
    #[must_use]
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    fn validate(&self, name: &str) -> Result<(), DistrictError> {
        let values = [self.south, self.west, self.north, self.east];
        if !values.iter().all(|value| value.is_finite()) {
            return Err(DistrictError::NonFiniteBounds {
                name: name.to_owned(),
            });
        }
        if self.south >= self.north {
            return Err(DistrictError::InvertedLatitude {
                name: name.to_owned(),
                south: self.south,
                north: self.north,
            });
        }
        if self.west >= self.east {
            return Err(DistrictError::InvertedLongitude {
                name: name.to_owned(),
                west: self.west,
                east: self.east,
            });
        }
        Ok(())
    }
}

/// Inclusive range of synthetic construction years.
///
/// # Examples
///
/// ```
/// use buildage_core::YearRange;
///
/// # fn main() -> Result<(), buildage_core::DistrictError> {
/// let years = YearRange::new(1850, 1950)?;
/// assert!(years.contains(1850));
/// assert_eq!(years.to_string(), "1850-1950");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    low: i32,
    high: i32,
}

impl YearRange {
    /// Validate and construct a range; `low` must not exceed `high`.
    pub fn new(low: i32, high: i32) -> Result<Self, DistrictError> {
        if low > high {
            return Err(DistrictError::InvertedYearRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Earliest year, inclusive.
    #[must_use]
    pub const fn low(&self) -> i32 {
        self.low
    }

    /// Latest year, inclusive.
    #[must_use]
    pub const fn high(&self) -> i32 {
        self.high
    }

    /// Whether `year` falls inside the range.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        self.low <= year && year <= self.high
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// A named region with its own bounding box and synthetic year range.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    name: String,
    bbox: BoundingBox,
    years: YearRange,
    limit: u32,
}

/// Errors returned by [`District::new`] and [`YearRange::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistrictError {
    /// The district name was empty or whitespace.
    #[error("district name must not be empty")]
    EmptyName,
    /// A bounding box coordinate was NaN or infinite.
    #[error("bounding box for {name} contains non-finite coordinates")]
    NonFiniteBounds {
        /// District name.
        name: String,
    },
    /// The southern edge was not below the northern edge.
    #[error("bounding box for {name} has south {south} not below north {north}")]
    InvertedLatitude {
        /// District name.
        name: String,
        /// Southern latitude.
        south: f64,
        /// Northern latitude.
        north: f64,
    },
    /// The western edge was not left of the eastern edge.
    #[error("bounding box for {name} has west {west} not left of east {east}")]
    InvertedLongitude {
        /// District name.
        name: String,
        /// Western longitude.
        west: f64,
        /// Eastern longitude.
        east: f64,
    },
    /// The year range was inverted.
    #[error("year range {low}-{high} is inverted")]
    InvertedYearRange {
        /// Requested earliest year.
        low: i32,
        /// Requested latest year.
        high: i32,
    },
    /// The feature limit was zero.
    #[error("feature limit for {name} must be positive")]
    ZeroLimit {
        /// District name.
        name: String,
    },
}

impl District {
    /// Validate and construct a district.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildage_core::{BoundingBox, District, YearRange};
    ///
    /// # fn main() -> Result<(), buildage_core::DistrictError> {
    /// let district = District::new(
    ///     "Altstadt",
    ///     BoundingBox::new(50.93, 6.94, 50.9485, 6.979),
    ///     YearRange::new(1850, 1950)?,
    ///     2000,
    /// )?;
    /// assert_eq!(district.year_source(), "synthetic:Altstadt");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        name: impl Into<String>,
        bbox: BoundingBox,
        years: YearRange,
        limit: u32,
    ) -> Result<Self, DistrictError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DistrictError::EmptyName);
        }
        bbox.validate(&name)?;
        if limit == 0 {
            return Err(DistrictError::ZeroLimit { name });
        }
        Ok(Self {
            name,
            bbox,
            years,
            limit,
        })
    }

    /// District name, unique within a [`Catalog`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bounding box queried upstream.
    #[must_use]
    pub const fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Synthetic construction years for this district.
    #[must_use]
    pub const fn years(&self) -> YearRange {
        self.years
    }

    /// Maximum number of elements requested upstream.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Provenance label recorded on every enriched feature.
    #[must_use]
    pub fn year_source(&self) -> String {
        format!("synthetic:{}", self.name)
    }
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two districts shared a name.
    #[error("district {name} appears more than once in the catalog")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

/// Ordered collection of districts processed by the pipeline.
///
/// Iteration order is the processing order, which also fixes the order in
/// which random draws are consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    districts: Vec<District>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate district names.
    pub fn new(districts: Vec<District>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for district in &districts {
            if !seen.insert(district.name()) {
                return Err(CatalogError::DuplicateName {
                    name: district.name().to_owned(),
                });
            }
        }
        Ok(Self { districts })
    }

    /// Four Cologne districts with hand-picked historical year ranges.
    #[must_use]
    pub fn cologne() -> Self {
        let entry = |name: &str, bbox: BoundingBox, low: i32, high: i32| District {
            name: name.to_owned(),
            bbox,
            years: YearRange { low, high },
            limit: DEFAULT_FEATURE_LIMIT,
        };
        Self {
            districts: vec![
                entry(
                    "Altstadt",
                    BoundingBox::new(50.9300, 6.9400, 50.9485, 6.9790),
                    1850,
                    1950,
                ),
                entry(
                    "Ehrenfeld",
                    BoundingBox::new(50.9400, 6.8900, 50.9850, 6.9650),
                    1920,
                    1980,
                ),
                entry(
                    "Chorweiler",
                    BoundingBox::new(50.9900, 6.8600, 51.0700, 6.9600),
                    1970,
                    2000,
                ),
                entry(
                    "Mülheim",
                    BoundingBox::new(50.9500, 6.9900, 51.0200, 7.0700),
                    1930,
                    2000,
                ),
            ],
        }
    }

    /// Iterate districts in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, District> {
        self.districts.iter()
    }

    /// Look up a district by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&District> {
        self.districts.iter().find(|district| district.name() == name)
    }

    /// Number of districts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    /// Whether the catalog has no districts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::cologne()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a District;
    type IntoIter = std::slice::Iter<'a, District>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
