//! Landmark-table coordinate estimation.
//!
//! The data directory ships a table of known areas and landmarks with their
//! coordinates (station fronts, ward offices, district centroids). Estimating
//! a facility's position from the longest matching table entry avoids a
//! network round-trip for the common case.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use super::Geocoder;
use crate::models::GeoPoint;

#[derive(Debug, Deserialize)]
struct TableFile(HashMap<String, GeoPoint>);

/// Substring-match geocoder over a static landmark table.
#[derive(Debug, Default)]
pub struct TableGeocoder {
    landmarks: HashMap<String, GeoPoint>,
}

impl TableGeocoder {
    /// Load the landmark table from a JSON file mapping place names to
    /// coordinates. A malformed table is fatal at startup.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;
        let content =
            std::fs::read_to_string(path).context("failed to read landmark table")?;
        let file: TableFile =
            serde_json::from_str(&content).context("malformed landmark table")?;
        info!("Landmark table loaded: {} entries", file.0.len());
        Ok(Self { landmarks: file.0 })
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, GeoPoint)>) -> Self {
        Self {
            landmarks: entries.into_iter().collect(),
        }
    }

    /// Longest table key contained in the address wins, so a specific
    /// landmark beats its surrounding area entry.
    fn estimate(&self, address: &str) -> Option<GeoPoint> {
        let compact: String = address.chars().filter(|c| !c.is_whitespace()).collect();
        self.landmarks
            .iter()
            .filter(|(key, _)| compact.contains(key.as_str()))
            .max_by_key(|(key, _)| key.chars().count())
            .map(|(_, point)| *point)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

#[async_trait]
impl Geocoder for TableGeocoder {
    async fn geocode(&self, address: &str) -> Option<GeoPoint> {
        self.estimate(address)
    }
}
