//! Upstream access and export formats for buildage.
//!
//! - [`overpass`] fetches raw building ways per district;
//! - [`export`] writes enriched features as GeoJSON and CSV.

#![forbid(unsafe_code)]

pub mod export;
pub mod overpass;
