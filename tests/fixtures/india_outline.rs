//! Coarse outline of India's border as named landmarks.
//!
//! Vertices run clockwise from the Rann of Kutch. This is a heavily
//! simplified tracing (country border files run to tens of thousands of
//! vertices); coordinates are real landmark positions, good enough for
//! nearest-vertex snapping in tests.

use map_sketch::border::BorderLoop;
use map_sketch::coord::LatLng;

/// A named border landmark.
#[derive(Debug, Clone)]
pub struct Landmark {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Landmark {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Clockwise outline, land border first, then down the east coast and back
/// up the west coast.
pub const INDIA_OUTLINE: &[Landmark] = &[
    Landmark::new("Rann of Kutch", 23.90, 68.70),
    Landmark::new("Jaisalmer sector", 26.90, 69.50),
    Landmark::new("Sri Ganganagar", 29.90, 73.90),
    Landmark::new("Wagah", 31.60, 74.60),
    Landmark::new("Kupwara sector", 34.50, 74.30),
    Landmark::new("Pangong Tso", 33.75, 78.65),
    Landmark::new("Shipki La", 31.80, 78.75),
    Landmark::new("Lipulekh", 30.23, 81.03),
    Landmark::new("Banbasa", 28.99, 80.08),
    Landmark::new("Sunauli", 27.46, 83.47),
    Landmark::new("Jogbani", 26.40, 87.26),
    Landmark::new("Nathu La", 27.39, 88.84),
    Landmark::new("Tawang sector", 27.59, 91.87),
    Landmark::new("Kibithu", 28.32, 97.02),
    Landmark::new("Moreh", 24.25, 94.30),
    Landmark::new("Zokhawthar", 23.37, 93.38),
    Landmark::new("Sabroom", 23.00, 91.73),
    Landmark::new("Sundarbans", 21.90, 89.00),
    Landmark::new("Chilika coast", 19.60, 85.50),
    Landmark::new("Krishna delta", 15.80, 80.80),
    Landmark::new("Chennai shore", 13.05, 80.28),
    Landmark::new("Rameswaram", 9.29, 79.31),
    Landmark::new("Kanyakumari", 8.08, 77.55),
    Landmark::new("Kochi shore", 9.97, 76.24),
    Landmark::new("Goa shore", 15.40, 73.80),
    Landmark::new("Mumbai shore", 19.00, 72.80),
    Landmark::new("Gulf of Khambhat", 21.00, 72.10),
    Landmark::new("Dwarka", 22.24, 68.97),
];

/// The outline as a border loop.
pub fn india_border() -> BorderLoop {
    BorderLoop::new(INDIA_OUTLINE.iter().map(Landmark::coords).collect())
}

/// Index of a named landmark in the outline.
pub fn landmark_index(name: &str) -> usize {
    INDIA_OUTLINE
        .iter()
        .position(|landmark| landmark.name == name)
        .unwrap_or_else(|| panic!("no landmark named {name:?}"))
}
