//! Outbound HTTP geocoder (Nominatim-compatible search endpoint).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::Geocoder;
use crate::models::GeoPoint;

const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Nominatim returns lat/lon as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Network geocoder with a bounded timeout. Any failure (network, timeout,
/// malformed response) degrades to `None`; a timed-out lookup is not retried
/// within a single resolution.
pub struct HttpGeocoder {
    client: Client,
    endpoint: Url,
}

impl HttpGeocoder {
    pub fn new(endpoint: Option<&str>) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint.unwrap_or(DEFAULT_ENDPOINT))?;
        let client = Client::builder()
            .user_agent("Madoguchi/0.1 (public-service contact resolver)")
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Geocoder for HttpGeocoder {
    async fn geocode(&self, address: &str) -> Option<GeoPoint> {
        let response = match self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!("Geocode request failed for '{}': {}", address, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Geocode request for '{}' returned status {}",
                address,
                response.status()
            );
            return None;
        }

        let hits: Vec<SearchHit> = match response.json().await {
            Ok(h) => h,
            Err(e) => {
                warn!("Malformed geocode response for '{}': {}", address, e);
                return None;
            }
        };

        let hit = hits.first()?;
        let lat = hit.lat.parse::<f64>().ok()?;
        let lon = hit.lon.parse::<f64>().ok()?;
        debug!("Geocoded '{}' to ({}, {})", address, lat, lon);
        Some(GeoPoint::new(lat, lon))
    }
}
