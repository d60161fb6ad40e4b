//! Test utilities for element sources.
//!
//! [`StubElementSource`] is a deterministic [`ElementSource`] that answers
//! from pre-configured documents without making HTTP requests, and records
//! which districts were requested.

use std::cell::RefCell;
use std::collections::HashMap;

use buildage_core::{District, RawElement};

use super::{ElementSource, FetchError, OverpassDocument};

/// Stub `ElementSource` for testing.
///
/// Districts without a configured response yield an empty document.
///
/// # Example
///
/// ```
/// use buildage_core::{Catalog, RawElement};
/// use buildage_data::overpass::ElementSource;
/// use buildage_data::overpass::test_support::StubElementSource;
///
/// let source = StubElementSource::default().with_elements(
///     "Altstadt",
///     vec![RawElement::way(1, &[(6.95, 50.94), (6.96, 50.94), (6.96, 50.95)])],
/// );
/// let catalog = Catalog::cologne();
/// let altstadt = catalog.get("Altstadt").expect("district in catalog");
///
/// let document = source.fetch_elements(altstadt).expect("stubbed response");
/// assert_eq!(document.elements.len(), 1);
/// assert_eq!(source.requested(), ["Altstadt"]);
/// ```
#[derive(Debug, Default)]
pub struct StubElementSource {
    responses: HashMap<String, StubResponse>,
    requested: RefCell<Vec<String>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Document(OverpassDocument),
    Error(FetchError),
}

impl StubElementSource {
    /// Answer requests for `district` with the given elements.
    #[must_use]
    pub fn with_elements(mut self, district: impl Into<String>, elements: Vec<RawElement>) -> Self {
        self.responses.insert(
            district.into(),
            StubResponse::Document(OverpassDocument::new(elements)),
        );
        self
    }

    /// Fail requests for `district` with the given error.
    #[must_use]
    pub fn with_error(mut self, district: impl Into<String>, error: FetchError) -> Self {
        self.responses
            .insert(district.into(), StubResponse::Error(error));
        self
    }

    /// District names requested so far, in call order.
    #[must_use]
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl ElementSource for StubElementSource {
    fn fetch_elements(&self, district: &District) -> Result<OverpassDocument, FetchError> {
        self.requested.borrow_mut().push(district.name().to_owned());
        match self.responses.get(district.name()) {
            Some(StubResponse::Document(document)) => Ok(document.clone()),
            Some(StubResponse::Error(error)) => Err(error.clone()),
            None => Ok(OverpassDocument::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildage_core::test_support::{district, square_way};
    use rstest::rstest;

    #[rstest]
    fn configured_elements_are_returned() {
        let source = StubElementSource::default().with_elements("Deutz", vec![square_way(1, 0.001)]);

        let document = source
            .fetch_elements(&district("Deutz", 1900, 1950))
            .expect("should succeed");

        assert_eq!(document.elements, vec![square_way(1, 0.001)]);
    }

    #[rstest]
    fn configured_error_is_returned() {
        let source = StubElementSource::default().with_error(
            "Deutz",
            FetchError::Http {
                url: "http://example.com/api/interpreter".to_owned(),
                status: 429,
                message: "Too Many Requests".to_owned(),
            },
        );

        let err = source
            .fetch_elements(&district("Deutz", 1900, 1950))
            .expect_err("should fail");

        assert_eq!(err.status(), Some(429));
    }

    #[rstest]
    fn unknown_districts_yield_empty_documents() {
        let source = StubElementSource::default();

        let document = source
            .fetch_elements(&district("Kalk", 1900, 1950))
            .expect("should succeed");

        assert!(document.elements.is_empty());
        assert_eq!(source.requested(), ["Kalk"]);
    }
}
