//! Test fixtures for map-sketch.
//!
//! Provides a coarse real-world border outline (India) with named
//! landmarks, suitable for nearest-vertex and arc-extraction tests.

pub mod india_outline;

pub use india_outline::*;
