//! Facility records and the per-query result types derived from them.

use serde::{Deserialize, Serialize};

use super::Region;

/// Geographic point (lat/lon, decimal degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A single directory entry: one public-service contact point.
///
/// Owned by the directory and immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    pub phone: String,
    pub address: String,

    /// Service tags carried by some municipal-office entries
    /// (e.g. ごみ収集, リサイクル, 環境対策).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,

    /// The region this record was registered under, filled in during load.
    #[serde(skip)]
    pub source_region: Region,
}

impl FacilityRecord {
    /// Dedup key: two entries with the same name and phone are one facility.
    pub fn identity(&self) -> (&str, &str) {
        (&self.name, &self.phone)
    }
}

/// A candidate scored against one query. Lives for a single resolution call.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub record: FacilityRecord,
    /// Great-circle distance from the query point, when the facility's own
    /// location could be resolved.
    pub distance_km: Option<f64>,
    /// Administrative-affinity bonus (same city / same district).
    pub priority_score: i32,
    /// Index of the radius checkpoint that first admitted this candidate.
    pub tier: Option<usize>,
    /// Position in the collected candidate pool, the final ordering tie-break.
    pub insertion_order: usize,
}

/// The externally visible unit: one contact in a category's ranked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResult {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

impl ContactResult {
    pub fn from_candidate(candidate: &ScoredCandidate) -> Self {
        Self {
            name: candidate.record.name.clone(),
            phone: candidate.record.phone.clone(),
            address: candidate.record.address.clone(),
            // Round to one decimal for display parity with the directory UI.
            distance_km: candidate.distance_km.map(|d| (d * 10.0).round() / 10.0),
            services: candidate.record.services.clone(),
        }
    }
}
