//! GeoJSON feature-collection export.

use std::io::{BufWriter, Write};

use buildage_core::Feature;
use buildage_fs::create_utf8_file;
use camino::Utf8Path;
use geojson::{FeatureCollection, Geometry, Value, feature::Id};
use log::debug;

use super::ExportError;

/// Default GeoJSON output path, relative to the working directory.
pub const DEFAULT_GEOJSON_PATH: &str = "synthetic_building_age.geojson";

/// Wrap features in a GeoJSON `FeatureCollection`, preserving order.
#[must_use]
pub fn feature_collection(features: &[Feature]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: features.iter().map(to_geojson).collect(),
        foreign_members: None,
    }
}

fn to_geojson(feature: &Feature) -> geojson::Feature {
    let ring = feature
        .ring()
        .coords()
        .map(|coord| vec![coord.x, coord.y])
        .collect();
    geojson::Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: Some(Id::String(feature.id().to_owned())),
        properties: Some(feature.properties().clone()),
        foreign_members: None,
    }
}

/// Write the collection as indented UTF-8 JSON to `writer`.
///
/// Non-ASCII characters are written literally.
pub fn write_geojson_to<W: Write>(writer: W, features: &[Feature]) -> serde_json::Result<()> {
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, &feature_collection(features))?;
    writer.write_all(b"\n").map_err(serde_json::Error::io)
}

/// Write the collection to `path`, replacing any existing file.
pub fn write_geojson(path: &Utf8Path, features: &[Feature]) -> Result<(), ExportError> {
    let file = create_utf8_file(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_geojson_to(&mut writer, features).map_err(|source| ExportError::SerialiseGeoJson {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} features to {path}", features.len());
    Ok(())
}
