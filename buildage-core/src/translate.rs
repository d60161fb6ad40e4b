//! Translation of raw upstream elements into closed-polygon features.

use geo::Coord;

use crate::{Feature, RawElement};

/// Minimum number of upstream vertices for a usable footprint.
pub const MIN_VERTICES: usize = 3;

/// Outcome of [`translate_elements`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Translation {
    /// Features in upstream element order.
    pub features: Vec<Feature>,
    /// Elements dropped because they were not ways or had too few vertices.
    pub skipped: usize,
}

/// Convert raw elements into polygon features.
///
/// Non-way elements and ways with fewer than [`MIN_VERTICES`] vertices are
/// skipped. Vertices keep their upstream order and the ring is closed.
/// Properties are copied verbatim from the element tags.
///
/// # Examples
///
/// ```
/// use buildage_core::{RawElement, translate_elements};
///
/// let elements = [
///     RawElement::way(1, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
///     RawElement::way(2, &[(0.0, 0.0), (1.0, 0.0)]),
/// ];
/// let translation = translate_elements(&elements);
/// assert_eq!(translation.features.len(), 1);
/// assert_eq!(translation.features[0].id(), "way/1");
/// assert_eq!(translation.skipped, 1);
/// ```
#[must_use]
pub fn translate_elements(elements: &[RawElement]) -> Translation {
    let mut translation = Translation::default();
    for element in elements {
        match translate_element(element) {
            Some(feature) => translation.features.push(feature),
            None => translation.skipped += 1,
        }
    }
    translation
}

fn translate_element(element: &RawElement) -> Option<Feature> {
    if !element.is_way() || element.vertices().len() < MIN_VERTICES {
        return None;
    }
    let vertices = element
        .vertices()
        .iter()
        .map(|point| Coord {
            x: point.lon,
            y: point.lat,
        })
        .collect();
    let properties = element.tags.clone().unwrap_or_default();
    Some(Feature::new(
        format!("way/{}", element.id),
        vertices,
        properties,
    ))
}
