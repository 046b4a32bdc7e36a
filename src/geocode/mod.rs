//! Geocoding collaborators.
//!
//! Everything behind the `Geocoder` seam is best-effort: an address that
//! cannot be resolved yields `None`, never an error. Resolution degrades to
//! affinity-only ranking for such facilities.

pub mod http;
pub mod table;

pub use http::HttpGeocoder;
pub use table::TableGeocoder;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::GeoPoint;

/// Address-to-coordinate resolution boundary.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `None` signals "unresolved", not an error.
    async fn geocode(&self, address: &str) -> Option<GeoPoint>;
}

/// Tries a sequence of geocoders in order, first hit wins. The usual setup is
/// the landmark table first, the network geocoder as fallback.
pub struct ChainGeocoder {
    chain: Vec<Arc<dyn Geocoder>>,
}

impl ChainGeocoder {
    pub fn new(chain: Vec<Arc<dyn Geocoder>>) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl Geocoder for ChainGeocoder {
    async fn geocode(&self, address: &str) -> Option<GeoPoint> {
        for geocoder in &self.chain {
            if let Some(point) = geocoder.geocode(address).await {
                return Some(point);
            }
        }
        None
    }
}

/// Exact-match geocoder backed by a fixed map. Test double; also handy for
/// fully offline deployments where every facility address is pre-resolved.
#[derive(Debug, Default, Clone)]
pub struct FixedGeocoder {
    points: HashMap<String, GeoPoint>,
}

impl FixedGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: &str, point: GeoPoint) {
        self.points.insert(address.to_string(), point);
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn geocode(&self, address: &str) -> Option<GeoPoint> {
        self.points.get(address).copied()
    }
}
