//! Polyline sequences and the encoded polyline codec.
//!
//! A [`Polyline`] stores decoded latitude/longitude points for internal
//! processing. [`encode`] and [`decode`] convert to and from the de-facto
//! standard compact text format (5 decimal digits of precision, delta +
//! one's-complement zigzag, 5-bit base-32 chunks offset into printable
//! ASCII). The encoded string is the only artifact that crosses the system
//! boundary, so the bit layout must match the standard exactly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::LatLng;

/// Scale factor for the fixed 5-decimal-digit precision.
const PRECISION: f64 = 1e5;

/// A route or sketch geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<LatLng>,
}

impl Polyline {
    /// Creates a new polyline from decoded coordinate points.
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<LatLng> {
        self.points
    }

    /// Encodes this polyline into the compact text format.
    pub fn encoded(&self) -> String {
        encode(&self.points)
    }

    /// Decodes an encoded polyline string.
    pub fn from_encoded(text: &str) -> Result<Self, DecodeError> {
        decode(text).map(Self::new)
    }
}

/// Malformed encoded-polyline input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The input ended while a chunk run still had its continuation flag set.
    #[error("encoded polyline ends mid-value at byte {position}")]
    UnexpectedEnd { position: usize },
    /// A latitude value was not followed by a longitude value.
    #[error("encoded polyline has a latitude with no matching longitude at byte {position}")]
    UnpairedCoordinate { position: usize },
    /// A byte outside the printable encoding range `[63, 126]`.
    #[error("invalid byte {byte:#04x} in encoded polyline at position {position}")]
    InvalidCharacter { byte: u8, position: usize },
    /// A chunk run longer than a 64-bit value can hold.
    #[error("encoded polyline value overflows 64 bits at byte {position}")]
    ValueOverflow { position: usize },
}

/// Encodes a coordinate sequence into the compact polyline text format.
///
/// Each component is rounded to 5 decimal digits and delta-encoded against
/// the previous point (the first point against 0,0). An empty slice encodes
/// to the empty string. Non-finite components are a caller contract
/// violation and produce garbage output; the codec does not validate
/// magnitude or finiteness.
pub fn encode(points: &[LatLng]) -> String {
    let mut out = String::new();
    let mut last_lat: i64 = 0;
    let mut last_lng: i64 = 0;

    for point in points {
        let lat = (point.lat * PRECISION).round() as i64;
        let lng = (point.lng * PRECISION).round() as i64;
        encode_value(lat - last_lat, &mut out);
        encode_value(lng - last_lng, &mut out);
        last_lat = lat;
        last_lng = lng;
    }

    out
}

/// Emits one signed delta as 5-bit chunks, least-significant first.
fn encode_value(delta: i64, out: &mut String) {
    let mut value = delta << 1;
    if delta < 0 {
        value = !value;
    }
    // value is non-negative after the sign transform
    while value >= 0x20 {
        out.push(((0x20 | (value & 0x1f)) as u8 + 63) as char);
        value >>= 5;
    }
    out.push((value as u8 + 63) as char);
}

/// Decodes an encoded polyline string back into coordinates.
///
/// Parsing is strict: a string that ends mid-chunk-run, leaves a latitude
/// unpaired, or contains bytes outside `[63, 126]` is rejected rather than
/// truncated.
pub fn decode(text: &str) -> Result<Vec<LatLng>, DecodeError> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::new();

    while pos < bytes.len() {
        lat += decode_value(bytes, &mut pos)?;
        if pos >= bytes.len() {
            return Err(DecodeError::UnpairedCoordinate { position: pos });
        }
        lng += decode_value(bytes, &mut pos)?;
        points.push(LatLng::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(points)
}

/// Reads one chunk run starting at `*pos` and returns the signed delta.
fn decode_value(bytes: &[u8], pos: &mut usize) -> Result<i64, DecodeError> {
    let mut acc: i64 = 0;
    let mut shift = 0;

    loop {
        // 13 chunks exhaust an i64; a still-continuing run is malformed,
        // not a bigger value.
        if shift >= 64 {
            return Err(DecodeError::ValueOverflow { position: *pos });
        }
        let Some(&byte) = bytes.get(*pos) else {
            return Err(DecodeError::UnexpectedEnd { position: *pos });
        };
        if !(63..=126).contains(&byte) {
            return Err(DecodeError::InvalidCharacter { byte, position: *pos });
        }
        *pos += 1;

        let chunk = (byte - 63) as i64;
        acc |= (chunk & 0x1f) << shift;
        shift += 5;
        if chunk < 0x20 {
            break;
        }
    }

    Ok(if acc & 1 != 0 { !(acc >> 1) } else { acc >> 1 })
}
