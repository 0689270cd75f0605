//! GeoJSON boundary adapter.
//!
//! The border algorithms consume an already-materialized [`BorderLoop`];
//! this module materializes one from the GeoJSON documents that country
//! borders ship as. Only the outer rings matter for border following:
//! a `Polygon` contributes its first ring, a `MultiPolygon` the first
//! ring of every polygon, concatenated in document order. Holes and
//! non-areal geometries are not borders.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::border::BorderLoop;
use crate::coord::LatLng;

/// Failure to turn a GeoJSON document into a border loop.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error("failed to read border document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to fetch border document: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("document has no features")]
    NoFeatures,
    #[error("unsupported geometry type (expected Polygon or MultiPolygon)")]
    UnsupportedGeometry,
    #[error("position with fewer than two components")]
    MalformedPosition,
    #[error("border has no vertices")]
    EmptyBorder,
}

/// GeoJSON positions are `[lng, lat]` (possibly with extra components).
type Position = Vec<f64>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

/// Builds a border loop from a GeoJSON string.
///
/// Accepts a bare geometry, a single `Feature`, or a `FeatureCollection`
/// (first feature wins, matching how single-country border files are laid
/// out).
pub fn border_from_str(text: &str) -> Result<BorderLoop, GeoJsonError> {
    border_from_value(serde_json::from_str(text)?)
}

/// Builds a border loop from an already-parsed GeoJSON value.
pub fn border_from_value(document: Value) -> Result<BorderLoop, GeoJsonError> {
    let geometry_value = match document {
        Value::Object(mut map) => {
            if let Some(features) = map.remove("features") {
                features
                    .as_array()
                    .and_then(|list| list.first())
                    .and_then(|feature| feature.get("geometry"))
                    .cloned()
                    .ok_or(GeoJsonError::NoFeatures)?
            } else if let Some(geometry) = map.remove("geometry") {
                geometry
            } else {
                Value::Object(map)
            }
        }
        other => other,
    };

    let geometry: Geometry = serde_json::from_value(geometry_value)?;
    let mut vertices = Vec::new();

    match geometry {
        Geometry::Polygon { coordinates } => {
            if let Some(outer) = coordinates.first() {
                append_ring(outer, &mut vertices)?;
            }
        }
        Geometry::MultiPolygon { coordinates } => {
            for polygon in &coordinates {
                if let Some(outer) = polygon.first() {
                    append_ring(outer, &mut vertices)?;
                }
            }
        }
        Geometry::Unsupported => return Err(GeoJsonError::UnsupportedGeometry),
    }

    if vertices.is_empty() {
        return Err(GeoJsonError::EmptyBorder);
    }

    debug!(vertices = vertices.len(), "materialized border loop");
    Ok(BorderLoop::new(vertices))
}

/// Loads a border loop from a GeoJSON file on disk.
pub fn load_border(path: impl AsRef<Path>) -> Result<BorderLoop, GeoJsonError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading border document");
    border_from_str(&fs::read_to_string(path)?)
}

/// Fetches a border loop from a GeoJSON document over HTTP.
pub fn fetch_border(url: &str) -> Result<BorderLoop, GeoJsonError> {
    debug!(url, "fetching border document");
    let document = reqwest::blocking::get(url)?
        .error_for_status()?
        .json::<Value>()?;
    border_from_value(document)
}

fn append_ring(ring: &[Position], vertices: &mut Vec<LatLng>) -> Result<(), GeoJsonError> {
    for position in ring {
        match position[..] {
            [lng, lat, ..] => vertices.push(LatLng::new(lat, lng)),
            _ => return Err(GeoJsonError::MalformedPosition),
        }
    }
    Ok(())
}
