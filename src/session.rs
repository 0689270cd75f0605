//! In-memory sketch session state.
//!
//! [`PathSketch`] is the path currently being drawn; [`BorderSelection`]
//! collects the two border clicks that bound an extracted arc. Neither
//! touches a rendering surface: the interactive layer feeds clicks in and
//! draws whatever comes back.

use tracing::debug;

use crate::border::{BorderError, BorderLoop};
use crate::coord::LatLng;
use crate::parse;
use crate::polyline::{DecodeError, Polyline};

/// The path currently being drawn, one point per map click.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSketch {
    points: Vec<LatLng>,
}

impl PathSketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn last(&self) -> Option<LatLng> {
        self.points.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a clicked point to the path.
    pub fn push(&mut self, point: LatLng) {
        self.points.push(point);
    }

    /// Removes and returns the most recent point.
    pub fn undo(&mut self) -> Option<LatLng> {
        self.points.pop()
    }

    /// Discards the whole path.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The path as `lat, lng` text lines, for the coordinate text box.
    pub fn as_text(&self) -> String {
        parse::format_path(&self.points)
    }

    /// Replaces the path from edited coordinate text.
    pub fn set_text(&mut self, text: &str) {
        self.points = parse::parse_path(text);
    }

    /// The path in the compact encoded form.
    pub fn encoded(&self) -> String {
        Polyline::new(self.points.clone()).encoded()
    }

    /// Replaces the path from a pasted encoded polyline.
    pub fn set_encoded(&mut self, encoded: &str) -> Result<(), DecodeError> {
        self.points = Polyline::from_encoded(encoded)?.into_points();
        Ok(())
    }
}

/// Two-click border selection.
///
/// Each click snaps to the nearest border vertex. The first click arms the
/// selection; the second yields the arc between the two snapped vertices
/// and resets for the next pair. A failed click (empty loop) also resets,
/// so a bad state never lingers into the next selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderSelection {
    first: Option<usize>,
}

impl BorderSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once the first click has been captured.
    pub fn is_armed(&self) -> bool {
        self.first.is_some()
    }

    /// Abandons a half-finished selection.
    pub fn reset(&mut self) {
        self.first = None;
    }

    /// Feeds one map click into the selection.
    ///
    /// Returns `Ok(None)` after the first click and `Ok(Some(arc))` after
    /// the second.
    pub fn click(
        &mut self,
        query: LatLng,
        border: &BorderLoop,
    ) -> Result<Option<Vec<LatLng>>, BorderError> {
        let snapped = match border.nearest_vertex(query) {
            Ok(index) => index,
            Err(err) => {
                self.first = None;
                return Err(err);
            }
        };

        match self.first.take() {
            None => {
                debug!(vertex = snapped, "border selection armed");
                self.first = Some(snapped);
                Ok(None)
            }
            Some(first) => {
                debug!(from = first, to = snapped, "extracting border arc");
                border.extract_arc(first, snapped).map(Some)
            }
        }
    }
}
