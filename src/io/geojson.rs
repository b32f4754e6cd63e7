//! GeoJSON reading: one polyline record per LineString or MultiLineString part.

use std::fmt;

use anyhow::{bail, Context, Result};
use geo::{Coord, LineString};
use serde_json::{Map, Value};

/// Property holding the feature identifier shown as the hover label.
pub const ID_FIELD: &str = "OBJECTID";

/// One polyline paired with the properties of the feature it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
    pub line: LineString<f64>,
    pub properties: Map<String, Value>,
}

impl FeatureRecord {
    /// Identifier text: strings as-is, numbers in their JSON form, anything else absent.
    /// Numbers are kept because network datasets commonly store integer ids.
    pub fn label(&self) -> Option<String> {
        match self.properties.get(ID_FIELD)? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Same properties, geometry replaced with `line`.
    pub fn with_line(&self, line: LineString<f64>) -> Self {
        Self { line, properties: self.properties.clone() }
    }
}

/// Input parsed, but no LineString/MultiLineString produced a usable polyline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoGeometry;

impl fmt::Display for NoGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("No LineString/MultiLineString features found.")
    }
}

impl std::error::Error for NoGeometry {}

/// Parse a FeatureCollection, requiring a top-level object with a `features` array.
pub fn parse_collection(bytes: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(bytes)
        .context("[io::geojson] Failed to parse GeoJSON")?;

    if !value.is_object() {
        bail!("[io::geojson] Expected a FeatureCollection object at the top level");
    }
    if !value["features"].is_array() {
        bail!("[io::geojson] FeatureCollection has no \"features\" array");
    }
    Ok(value)
}

/// Lazily yield one record per usable line, in document order.
/// Unsupported geometry types and lines with fewer than two points are skipped.
pub fn extract_lines(collection: &Value) -> impl Iterator<Item = FeatureRecord> + '_ {
    collection["features"].as_array()
        .into_iter()
        .flatten()
        .flat_map(feature_lines)
}

/// Parse and extract all records, failing with [`NoGeometry`] if none are usable.
pub fn read_features(bytes: &[u8]) -> Result<Vec<FeatureRecord>> {
    let collection = parse_collection(bytes)?;
    let records: Vec<FeatureRecord> = extract_lines(&collection).collect();
    if records.is_empty() { return Err(NoGeometry.into()) }
    Ok(records)
}

/// Split a feature into records. Multi-part lines keep every part, sharing properties.
fn feature_lines(feature: &Value) -> Vec<FeatureRecord> {
    let geometry = &feature["geometry"];
    let coordinates = &geometry["coordinates"];

    let parts: Vec<&Value> = match geometry["type"].as_str() {
        Some("LineString") => vec![coordinates],
        Some("MultiLineString") => coordinates.as_array().map(|parts| parts.iter().collect()).unwrap_or_default(),
        _ => return Vec::new(),
    };

    let properties = feature["properties"].as_object().cloned().unwrap_or_default();
    parts.into_iter()
        .filter_map(parse_line)
        .map(|line| FeatureRecord { line, properties: properties.clone() })
        .collect()
}

/// Parse `[[lon, lat], ...]`. Extra ordinates (elevation) are dropped.
fn parse_line(coords: &Value) -> Option<LineString<f64>> {
    let points = coords.as_array()?
        .iter()
        .map(|pair| {
            let pair = pair.as_array()?;
            Some(Coord { x: pair.first()?.as_f64()?, y: pair.get(1)?.as_f64()? })
        })
        .collect::<Option<Vec<_>>>()?;

    (points.len() >= 2).then(|| LineString(points))
}
