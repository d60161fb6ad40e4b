//! Overpass QL query construction.

use buildage_core::District;

/// Server-side query timeout in seconds, embedded in the query header.
pub const QUERY_TIMEOUT_SECS: u32 = 60;

/// Build the query selecting `building`-tagged ways inside the district's box.
///
/// The `out geom` statement inlines way vertices and caps the result at the
/// district's feature limit.
///
/// # Examples
///
/// ```
/// use buildage_core::Catalog;
/// use buildage_data::overpass::building_query;
///
/// let catalog = Catalog::cologne();
/// let altstadt = catalog.get("Altstadt").expect("district in catalog");
/// let query = building_query(altstadt);
/// assert!(query.contains(r#"way["building"](50.93,6.94,50.9485,6.979);"#));
/// assert!(query.contains("out geom 2000;"));
/// ```
#[must_use]
pub fn building_query(district: &District) -> String {
    let bbox = district.bbox();
    format!(
        "[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n\
         (\n  way[\"building\"]({},{},{},{});\n);\n\
         out geom {};\n",
        bbox.south,
        bbox.west,
        bbox.north,
        bbox.east,
        district.limit()
    )
}
