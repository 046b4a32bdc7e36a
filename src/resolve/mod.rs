//! Contact resolution: collect, score, radius-search, assemble.

pub mod assemble;
pub mod config;
pub mod radius;
pub mod score;

pub use config::ResolveConfig;

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::directory::Directory;
use crate::geo::haversine_km;
use crate::geocode::Geocoder;
use crate::models::{Category, ContactResult, GeoPoint, Region, ScoredCandidate};

/// Stateless resolution engine over an immutable directory and a geocoding
/// collaborator. Cheap to share; every call is independent.
pub struct Resolver {
    directory: Arc<Directory>,
    geocoder: Arc<dyn Geocoder>,
    config: ResolveConfig,
}

impl Resolver {
    pub fn new(directory: Arc<Directory>, geocoder: Arc<dyn Geocoder>, config: ResolveConfig) -> Self {
        Self {
            directory,
            geocoder,
            config,
        }
    }

    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Resolve every category for the caller's region, ranked and capped.
    ///
    /// The returned map always contains every category key; categories with
    /// nothing qualifying map to empty lists. Never fails for ordinary
    /// "no data" conditions. Categories share no mutable state, so they run
    /// concurrently.
    pub async fn get_contacts(
        &self,
        region: &Region,
        coord: Option<GeoPoint>,
    ) -> BTreeMap<Category, Vec<ContactResult>> {
        let per_category = Category::all()
            .iter()
            .map(|category| async move {
                (*category, self.resolve_category(*category, region, coord).await)
            });

        futures::future::join_all(per_category)
            .await
            .into_iter()
            .collect()
    }

    async fn resolve_category(
        &self,
        category: Category,
        region: &Region,
        coord: Option<GeoPoint>,
    ) -> Vec<ContactResult> {
        let pool = self.directory.collect(region, category);
        if pool.is_empty() {
            return Vec::new();
        }

        let mut scored = Vec::with_capacity(pool.len());
        for (insertion_order, record) in pool.into_iter().enumerate() {
            // Without a query coordinate there is nothing to measure against;
            // skip candidate geocoding entirely and rank by affinity.
            let distance_km = match coord {
                Some(target) => self
                    .geocoder
                    .geocode(&record.address)
                    .await
                    .map(|point| haversine_km(target, point)),
                None => None,
            };
            let priority_score = score::priority_score(&record.source_region, region, &self.config);
            scored.push(ScoredCandidate {
                record,
                distance_km,
                priority_score,
                tier: None,
                insertion_order,
            });
        }

        if coord.is_some() {
            let admitted = radius::progressive_admit(
                &mut scored,
                &self.config.radius_steps_km,
                self.config.min_results,
            );
            debug!(
                "{} {}: {} candidate(s), {} admitted by radius search",
                region,
                category,
                scored.len(),
                admitted
            );
        }

        assemble::assemble(&scored, self.config.cap_for(category), &self.config)
    }
}
