//! Overpass JSON response document.
//!
//! Only the `elements` list is read; `version`, `generator`, `osm3s` and any
//! other top-level keys are ignored.

use buildage_core::RawElement;
use serde::Deserialize;

/// Decoded Overpass response body.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OverpassDocument {
    /// Elements with inline geometry, in server order.
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

impl OverpassDocument {
    /// Wrap a list of elements.
    #[must_use]
    pub const fn new(elements: Vec<RawElement>) -> Self {
        Self { elements }
    }
}
