//! Resolution tunables.
//!
//! Every constant of the search (checkpoint ladder, minimum hit count,
//! distance cap, affinity bonuses, per-category caps) lives here and can be
//! overridden from the server's TOML config.

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Radius checkpoints in kilometers. Fine-grained near steps suit dense urban
/// clustering; the coarser far steps keep sparse rural searches bounded.
pub const RADIUS_STEPS_KM: [f64; 11] = [1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 9.0, 11.0, 13.0, 15.0, 17.0];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Ascending radius checkpoint ladder.
    pub radius_steps_km: Vec<f64>,

    /// Stop expanding the ladder once this many candidates are admitted.
    pub min_results: usize,

    /// Drop results with a known distance beyond this, unless that would
    /// empty the category. `None` disables the cutoff.
    pub max_distance_km: Option<f64>,

    /// Outer bound for the keep-the-closest fallback in sparse regions.
    pub fallback_ceiling_km: f64,

    /// Affinity bonus for a facility registered in the caller's city.
    pub city_bonus: i32,

    /// Additional bonus when the district matches too.
    pub district_bonus: i32,

    /// Result cap for emergency categories (police, fire, hospital).
    pub emergency_cap: usize,

    /// Result cap for administrative and utility categories.
    pub standard_cap: usize,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            radius_steps_km: RADIUS_STEPS_KM.to_vec(),
            min_results: 3,
            max_distance_km: Some(10.0),
            fallback_ceiling_km: 50.0,
            city_bonus: 100,
            district_bonus: 50,
            emergency_cap: 3,
            standard_cap: 2,
        }
    }
}

impl ResolveConfig {
    pub fn cap_for(&self, category: Category) -> usize {
        if category.is_emergency() {
            self.emergency_cap
        } else {
            self.standard_cap
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ResolveConfig::default();
        assert_eq!(cfg.radius_steps_km.len(), 11);
        assert_eq!(cfg.cap_for(Category::Police), 3);
        assert_eq!(cfg.cap_for(Category::Gas), 2);
    }

    #[test]
    fn test_partial_toml_override() {
        let cfg: ResolveConfig = toml::from_str("min_results = 5").unwrap();
        assert_eq!(cfg.min_results, 5);
        assert_eq!(cfg.max_distance_km, Some(10.0));
    }
}
