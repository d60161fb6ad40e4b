//! Raw upstream elements as returned by an Overpass `out geom` query.

use serde::Deserialize;

use crate::Properties;

/// Element type tag carried by building footprints.
pub const WAY_TYPE: &str = "way";

/// A vertex of an element's inline geometry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ElementPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

/// An upstream geometry record.
///
/// Unknown fields are ignored. A missing or `null` geometry is treated as an
/// empty vertex list, and missing tags as an empty mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawElement {
    /// Element type tag (`"node"`, `"way"`, `"relation"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Upstream numeric identifier.
    pub id: u64,
    /// Inline vertices in upstream order.
    #[serde(default)]
    pub geometry: Option<Vec<ElementPoint>>,
    /// Free-form tag mapping.
    #[serde(default)]
    pub tags: Option<Properties>,
}

impl RawElement {
    /// Build a way element from `(lon, lat)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use buildage_core::RawElement;
    ///
    /// let way = RawElement::way(7, &[(6.95, 50.94), (6.96, 50.94), (6.96, 50.95)]);
    /// assert!(way.is_way());
    /// assert_eq!(way.vertices().len(), 3);
    /// ```
    #[must_use]
    pub fn way(id: u64, lon_lat: &[(f64, f64)]) -> Self {
        Self {
            kind: WAY_TYPE.to_owned(),
            id,
            geometry: Some(
                lon_lat
                    .iter()
                    .map(|&(lon, lat)| ElementPoint { lat, lon })
                    .collect(),
            ),
            tags: None,
        }
    }

    /// Attach a tag, replacing any previous value for `key`.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(Properties::new)
            .insert(key.into(), serde_json::Value::String(value.into()));
        self
    }

    /// Whether the element is a way.
    #[must_use]
    pub fn is_way(&self) -> bool {
        self.kind == WAY_TYPE
    }

    /// Inline vertices, empty when the geometry is absent.
    #[must_use]
    pub fn vertices(&self) -> &[ElementPoint] {
        self.geometry.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserialises_way_with_geometry_and_tags() {
        let json = r#"{
            "type": "way",
            "id": 42,
            "bounds": {"minlat": 50.0, "minlon": 6.0, "maxlat": 51.0, "maxlon": 7.0},
            "nodes": [1, 2, 3],
            "geometry": [
                {"lat": 50.0, "lon": 6.0},
                {"lat": 50.0, "lon": 7.0},
                {"lat": 51.0, "lon": 7.0}
            ],
            "tags": {"building": "yes", "name": "Dom"}
        }"#;

        let element: RawElement = serde_json::from_str(json).expect("should deserialise");

        assert!(element.is_way());
        assert_eq!(element.id, 42);
        assert_eq!(element.vertices().len(), 3);
        assert_eq!(element.vertices()[1], ElementPoint { lat: 50.0, lon: 7.0 });
        let tags = element.tags.expect("tags present");
        assert_eq!(tags.get("name").and_then(|v| v.as_str()), Some("Dom"));
    }

    #[rstest]
    #[case(r#"{"type": "node", "id": 1, "lat": 50.0, "lon": 6.0}"#)]
    #[case(r#"{"type": "way", "id": 1, "geometry": null}"#)]
    fn missing_geometry_reads_as_empty(#[case] json: &str) {
        let element: RawElement = serde_json::from_str(json).expect("should deserialise");
        assert!(element.vertices().is_empty());
        assert!(element.tags.is_none());
    }

    #[rstest]
    fn with_tag_accumulates_tags() {
        let element = RawElement::way(1, &[])
            .with_tag("building", "house")
            .with_tag("building", "church");
        let tags = element.tags.expect("tags present");
        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags.get("building").and_then(|v| v.as_str()),
            Some("church")
        );
    }
}
