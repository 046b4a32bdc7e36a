//! Static reference directory of public-service contacts.
//!
//! Built once at startup from a JSON file into an immutable structure and
//! shared read-only across resolutions (wrap in `Arc`). Never mutated during
//! queries.

pub mod load;

pub use load::{DirectoryError, DirectoryFile};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tracing::info;

use crate::models::{Category, FacilityRecord, Region};

type CategoryMap = BTreeMap<Category, Vec<FacilityRecord>>;

/// Region-keyed lookup: (prefecture, city, district) -> category -> records,
/// plus per-prefecture region-independent services.
#[derive(Debug, Default)]
pub struct Directory {
    regions: HashMap<Region, CategoryMap>,
    prefecture_wide: HashMap<String, CategoryMap>,
}

impl Directory {
    /// Load the directory from a JSON file. Malformed files are fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let file = DirectoryFile::read(path)?;
        let directory = Self::from_file(file);
        info!(
            "Directory loaded: {} regions, {} facilities",
            directory.regions.len(),
            directory.facility_count()
        );
        Ok(directory)
    }

    pub fn from_file(file: DirectoryFile) -> Self {
        let mut directory = Directory::default();

        for (prefecture, node) in &file.0 {
            for (city, districts) in &node.cities {
                for (district, entries) in districts {
                    for (category, records) in entries {
                        for raw in records {
                            directory.insert(
                                *category,
                                load::materialize(raw, prefecture, city, district),
                            );
                        }
                    }
                }
            }
            for (category, records) in &node.prefecture_wide {
                for raw in records {
                    directory.insert_prefecture_wide(
                        *category,
                        load::materialize(raw, prefecture, "", ""),
                    );
                }
            }
        }

        directory
    }

    /// Register a record under its source region. Exposed for in-memory
    /// construction in tests and tools.
    pub fn insert(&mut self, category: Category, record: FacilityRecord) {
        self.regions
            .entry(record.source_region.clone())
            .or_default()
            .entry(category)
            .or_default()
            .push(record);
    }

    /// Register a prefecture-wide record (blank city and district).
    pub fn insert_prefecture_wide(&mut self, category: Category, record: FacilityRecord) {
        self.prefecture_wide
            .entry(record.source_region.prefecture.clone())
            .or_default()
            .entry(category)
            .or_default()
            .push(record);
    }

    /// Exact-path lookup; empty slice for unknown regions.
    pub fn lookup(&self, region: &Region, category: Category) -> &[FacilityRecord] {
        self.regions
            .get(region)
            .and_then(|m| m.get(&category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Gather every record plausibly relevant to the caller's region for one
    /// category, without any distance or count filtering:
    ///
    /// 1. entries on the exact (prefecture, city, district) path,
    /// 2. city-wide entries under (prefecture, city, "") not already present,
    /// 3. prefecture-wide entries, only when the city yielded nothing.
    ///
    /// Unknown prefectures degrade to an empty pool, never an error.
    pub fn collect(&self, region: &Region, category: Category) -> Vec<FacilityRecord> {
        let mut pool: Vec<FacilityRecord> = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();

        let mut push = |records: &[FacilityRecord], pool: &mut Vec<FacilityRecord>| {
            for record in records {
                let key = (record.name.clone(), record.phone.clone());
                if seen.insert(key) {
                    pool.push(record.clone());
                }
            }
        };

        push(self.lookup(region, category), &mut pool);

        if !region.district.is_empty() {
            let city_wide = Region::new(&region.prefecture, &region.city, "");
            push(self.lookup(&city_wide, category), &mut pool);
        }

        if pool.is_empty() {
            if let Some(wide) = self
                .prefecture_wide
                .get(&region.prefecture)
                .and_then(|m| m.get(&category))
            {
                push(wide.as_slice(), &mut pool);
            }
        }

        pool
    }

    /// Total number of registered facilities.
    pub fn facility_count(&self) -> usize {
        let regional: usize = self
            .regions
            .values()
            .flat_map(|m| m.values())
            .map(Vec::len)
            .sum();
        let wide: usize = self
            .prefecture_wide
            .values()
            .flat_map(|m| m.values())
            .map(Vec::len)
            .sum();
        regional + wide
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.prefecture_wide.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str, region: Region) -> FacilityRecord {
        FacilityRecord {
            name: name.to_string(),
            phone: phone.to_string(),
            address: format!("{} {}", region, name),
            services: Vec::new(),
            source_region: region,
        }
    }

    fn sample() -> Directory {
        let mut d = Directory::default();
        d.insert(
            Category::Police,
            record("渋谷警察署", "03-3498-0110", Region::new("東京都", "渋谷区", "")),
        );
        d.insert(
            Category::Police,
            record("原宿警察署", "03-3408-0110", Region::new("東京都", "渋谷区", "")),
        );
        d.insert(
            Category::Police,
            record(
                "鶴見警察署",
                "045-504-0110",
                Region::new("神奈川県", "横浜市", "鶴見区"),
            ),
        );
        d.insert_prefecture_wide(
            Category::LaborBureau,
            record("東京労働局", "03-3512-1600", Region::new("東京都", "", "")),
        );
        d
    }

    #[test]
    fn test_exact_path_collection() {
        let d = sample();
        let pool = d.collect(&Region::new("東京都", "渋谷区", ""), Category::Police);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_district_falls_back_to_city_wide() {
        let d = sample();
        // No district-scoped entries exist; the city-wide ones still apply.
        let pool = d.collect(&Region::new("東京都", "渋谷区", "恵比寿"), Category::Police);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_district_scoped_plus_city_wide_dedup() {
        let mut d = sample();
        let district = Region::new("神奈川県", "横浜市", "鶴見区");
        // Same facility also present city-wide must not be duplicated.
        d.insert(
            Category::Police,
            record("鶴見警察署", "045-504-0110", Region::new("神奈川県", "横浜市", "")),
        );
        let pool = d.collect(&district, Category::Police);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_prefecture_wide_fallback() {
        let d = sample();
        let pool = d.collect(&Region::new("東京都", "渋谷区", ""), Category::LaborBureau);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].name, "東京労働局");
    }

    #[test]
    fn test_unknown_prefecture_empty() {
        let d = sample();
        let pool = d.collect(&Region::new("沖縄県", "那覇市", ""), Category::Police);
        assert!(pool.is_empty());
    }
}
