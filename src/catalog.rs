//! Registry of loaded country borders.
//!
//! The sketch tool keeps every border it has loaded, keyed by region name,
//! with at most one region active for border following at a time.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::border::BorderLoop;
use crate::geojson::{self, GeoJsonError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no border loaded for region {0:?}")]
    UnknownRegion(String),
    #[error("failed to read border directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load border for region {region:?}: {source}")]
    Load {
        region: String,
        source: GeoJsonError,
    },
}

/// Borders keyed by region name, with an optional active selection.
#[derive(Debug, Default)]
pub struct BorderCatalog {
    borders: HashMap<String, BorderLoop>,
    active: Option<String>,
}

impl BorderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a border under a region name, replacing any previous one.
    pub fn insert(&mut self, region: impl Into<String>, border: BorderLoop) {
        let region = region.into();
        debug!(region = %region, vertices = border.len(), "registered border");
        self.borders.insert(region, border);
    }

    pub fn get(&self, region: &str) -> Option<&BorderLoop> {
        self.borders.get(region)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.borders.keys().map(String::as_str)
    }

    /// Makes a loaded region the active border.
    pub fn set_active(&mut self, region: &str) -> Result<(), CatalogError> {
        if !self.borders.contains_key(region) {
            return Err(CatalogError::UnknownRegion(region.to_string()));
        }
        self.active = Some(region.to_string());
        Ok(())
    }

    /// The border selected for border following, if any.
    pub fn active(&self) -> Option<&BorderLoop> {
        self.active.as_deref().and_then(|region| self.borders.get(region))
    }

    pub fn active_region(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Loads every `*.geojson` file in a directory, in parallel.
    ///
    /// The region name is the file stem. Returns the regions registered,
    /// in directory order. A file that fails to parse fails the whole
    /// load; nothing is partially registered.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<String>, CatalogError> {
        let mut paths: Vec<_> = fs::read_dir(dir.as_ref())?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "geojson"))
            .collect();
        paths.sort();

        if paths.is_empty() {
            warn!(dir = %dir.as_ref().display(), "no .geojson files found");
        }

        let loaded = paths
            .par_iter()
            .map(|path| {
                let region = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                geojson::load_border(path)
                    .map(|border| (region.clone(), border))
                    .map_err(|source| CatalogError::Load { region, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut regions = Vec::with_capacity(loaded.len());
        for (region, border) in loaded {
            regions.push(region.clone());
            self.insert(region, border);
        }
        Ok(regions)
    }
}
