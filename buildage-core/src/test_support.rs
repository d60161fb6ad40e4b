//! Builders shared by unit and behaviour tests across the workspace.

use crate::{BoundingBox, District, RawElement, YearRange};

/// Build a district around Cologne with the given name and year range.
///
/// # Panics
///
/// Panics when `low > high`; test fixtures are expected to be valid.
#[must_use]
#[expect(clippy::expect_used, reason = "Test fixtures fail loudly on bad input")]
pub fn district(name: &str, low: i32, high: i32) -> District {
    let years = YearRange::new(low, high).expect("fixture year range must be ordered");
    District::new(name, BoundingBox::new(50.90, 6.85, 51.10, 7.10), years, 100)
        .expect("fixture district must be valid")
}

/// A closed-on-translation square way with `side` degrees, anchored at `(6.9, 50.9)`.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "Fixture geometry offsets")]
pub fn square_way(id: u64, side: f64) -> RawElement {
    let (lon, lat) = (6.9, 50.9);
    RawElement::way(
        id,
        &[
            (lon, lat),
            (lon + side, lat),
            (lon + side, lat + side),
            (lon, lat + side),
        ],
    )
    .with_tag("building", "yes")
}

/// A degenerate way with only two vertices, which translation discards.
#[must_use]
pub fn sliver_way(id: u64) -> RawElement {
    RawElement::way(id, &[(6.9, 50.9), (6.91, 50.91)])
}
