//! map-sketch core
//!
//! Coordinate handling for a map path-sketching tool: a lossless encoded
//! polyline codec, nearest-vertex lookup and arc extraction on country
//! border loops, and the in-memory sketch session that ties them together.
//! Rendering and event capture live elsewhere; everything here is plain
//! data in, plain data out.

pub mod border;
pub mod catalog;
pub mod coord;
pub mod geojson;
pub mod parse;
pub mod polyline;
pub mod session;
