//! Overpass API access for building footprints.
//!
//! This module provides [`HttpOverpassSource`], an implementation of
//! [`ElementSource`] that posts an Overpass QL query per district and decodes
//! the `out geom` JSON response into raw elements.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use buildage_core::Catalog;
//! use buildage_data::overpass::{ElementSource, HttpOverpassSource, HttpOverpassSourceConfig};
//!
//! let config = HttpOverpassSourceConfig::new("https://overpass-api.de/api/interpreter")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_user_agent("my-app/1.0");
//! let source = HttpOverpassSource::with_config(config)?;
//!
//! let catalog = Catalog::cologne();
//! let altstadt = catalog.get("Altstadt").expect("district in catalog");
//! let document = source.fetch_elements(altstadt)?;
//! println!("{} elements", document.elements.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod query;
mod response;
mod source;

#[doc(hidden)]
pub mod test_support;

pub use error::{ClientBuildError, FetchError};
pub use query::{QUERY_TIMEOUT_SECS, building_query};
pub use response::OverpassDocument;
pub use source::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ElementSource, HttpOverpassSource,
    HttpOverpassSourceConfig,
};
