//! Text form of coordinate paths.
//!
//! The sketch surface shows the active path as one `lat, lng` line per
//! point. Parsing is tolerant: a line that doesn't contain a coordinate
//! pair is simply skipped, so headings and blank lines in a pasted block
//! are harmless.

use crate::coord::LatLng;

/// Parses a single `lat, lng` line.
///
/// Returns `None` when the line has no comma-separated pair of finite
/// decimal numbers. Surrounding whitespace is ignored.
pub fn parse_line(line: &str) -> Option<LatLng> {
    let (lat_part, lng_part) = line.split_once(',')?;
    let lat: f64 = lat_part.trim().parse().ok()?;
    let lng: f64 = lng_part.trim().parse().ok()?;
    if !lat.is_finite() || !lng.is_finite() {
        return None;
    }
    Some(LatLng::new(lat, lng))
}

/// Parses a multi-line block into a path, skipping unparseable lines.
pub fn parse_path(text: &str) -> Vec<LatLng> {
    text.lines().filter_map(parse_line).collect()
}

/// Formats a path as one `lat, lng` line per point, 4 decimal places.
pub fn format_path(points: &[LatLng]) -> String {
    points
        .iter()
        .map(|p| format!("{:.4}, {:.4}", p.lat, p.lng))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let p = parse_line("28.6139, 77.2090").unwrap();
        assert_eq!(p, LatLng::new(28.6139, 77.2090));
    }

    #[test]
    fn test_parse_line_negative_and_spacing() {
        let p = parse_line("  -33.8688,151.2093  ").unwrap();
        assert_eq!(p, LatLng::new(-33.8688, 151.2093));
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        assert!(parse_line("").is_none());
        assert!(parse_line("not a coordinate").is_none());
        assert!(parse_line("12.5").is_none());
        assert!(parse_line("12.5, east").is_none());
        assert!(parse_line("NaN, 10.0").is_none());
    }

    #[test]
    fn test_parse_path_skips_bad_lines() {
        let text = "10.0, 20.0\n\n# comment\n30.0, 40.0";
        let path = parse_path(text);
        assert_eq!(path, vec![LatLng::new(10.0, 20.0), LatLng::new(30.0, 40.0)]);
    }

    #[test]
    fn test_format_path_four_decimals() {
        let text = format_path(&[LatLng::new(28.61391, 77.209), LatLng::new(-1.5, 2.0)]);
        assert_eq!(text, "28.6139, 77.2090\n-1.5000, 2.0000");
    }

    #[test]
    fn test_format_then_parse() {
        let points = vec![LatLng::new(36.1126, -115.1767), LatLng::new(36.1162, -115.1745)];
        assert_eq!(parse_path(&format_path(&points)), points);
    }

    #[test]
    fn test_format_empty_path() {
        assert_eq!(format_path(&[]), "");
    }
}
