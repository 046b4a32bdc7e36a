//! Directory file parsing and validation.
//!
//! The reference directory ships as a JSON file shaped
//! prefecture -> city -> district -> category -> records, with an optional
//! `prefecture_wide` block of region-independent services per prefecture.
//! A blank district key holds city-wide entries.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::models::{Category, FacilityRecord};

/// Fatal conditions while loading the directory. Unlike query-time "no data"
/// outcomes, a file that cannot be read or parsed indicates a corrupt data
/// source and aborts startup.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read directory file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed directory file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid record under {prefecture}/{city}: {reason}")]
    Invalid {
        prefecture: String,
        city: String,
        reason: String,
    },
}

/// One facility as written in the file; `source_region` is attached during
/// the load walk.
#[derive(Debug, Deserialize)]
pub struct RawFacility {
    pub name: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub services: Vec<String>,
}

pub type CategoryEntries = BTreeMap<Category, Vec<RawFacility>>;

#[derive(Debug, Default, Deserialize)]
pub struct PrefectureNode {
    /// city -> district ("" = city-wide) -> category -> records
    #[serde(default)]
    pub cities: BTreeMap<String, BTreeMap<String, CategoryEntries>>,

    /// Services registered directly under the prefecture, used only when a
    /// city yields nothing for a category.
    #[serde(default)]
    pub prefecture_wide: CategoryEntries,
}

/// Top-level file model: prefecture name -> node.
#[derive(Debug, Deserialize)]
pub struct DirectoryFile(pub BTreeMap<String, PrefectureNode>);

impl DirectoryFile {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path)?;
        let file: DirectoryFile = serde_json::from_str(&content)?;
        file.validate()?;
        Ok(file)
    }

    fn validate(&self) -> Result<(), DirectoryError> {
        let check = |records: &[RawFacility], prefecture: &str, city: &str| {
            for record in records {
                if record.name.is_empty() || record.phone.is_empty() {
                    return Err(DirectoryError::Invalid {
                        prefecture: prefecture.to_string(),
                        city: city.to_string(),
                        reason: "record missing name or phone".to_string(),
                    });
                }
            }
            Ok(())
        };

        for (prefecture, node) in &self.0 {
            for (city, districts) in &node.cities {
                for entries in districts.values() {
                    for records in entries.values() {
                        check(records, prefecture, city)?;
                    }
                }
            }
            for records in node.prefecture_wide.values() {
                check(records, prefecture, "")?;
            }
        }
        Ok(())
    }
}

/// Materialize a file record into an owned `FacilityRecord` with its source
/// region attached.
pub fn materialize(
    raw: &RawFacility,
    prefecture: &str,
    city: &str,
    district: &str,
) -> FacilityRecord {
    FacilityRecord {
        name: raw.name.clone(),
        phone: raw.phone.clone(),
        address: raw.address.clone(),
        services: raw.services.clone(),
        source_region: crate::models::Region::new(prefecture, city, district),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {
        "東京都": {
            "cities": {
                "渋谷区": {
                    "": {
                        "警察署": [
                            {"name": "渋谷警察署", "phone": "03-3498-0110",
                             "address": "東京都渋谷区渋谷3-8-15"}
                        ]
                    }
                }
            },
            "prefecture_wide": {
                "労基署": [
                    {"name": "渋谷労働基準監督署", "phone": "03-3780-6527",
                     "address": "東京都渋谷区神南1-3-5"}
                ]
            }
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let file: DirectoryFile = serde_json::from_str(SAMPLE).unwrap();
        file.validate().unwrap();
        let tokyo = &file.0["東京都"];
        assert!(tokyo.cities.contains_key("渋谷区"));
        assert_eq!(tokyo.prefecture_wide[&Category::LaborBureau].len(), 1);
    }

    #[test]
    fn test_missing_phone_rejected() {
        let bad = r#"
        {
            "東京都": {
                "cities": {
                    "渋谷区": {
                        "": { "警察署": [ {"name": "渋谷警察署", "phone": "", "address": "x"} ] }
                    }
                }
            }
        }"#;
        let file: DirectoryFile = serde_json::from_str(bad).unwrap();
        assert!(matches!(
            file.validate(),
            Err(DirectoryError::Invalid { .. })
        ));
    }

    #[test]
    fn test_unknown_category_is_malformed() {
        let bad = r#"
        {
            "東京都": {
                "cities": {
                    "渋谷区": { "": { "温泉": [] } }
                }
            }
        }"#;
        assert!(serde_json::from_str::<DirectoryFile>(bad).is_err());
    }

    #[test]
    fn test_read_from_disk() {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        let file = DirectoryFile::read(f.path()).unwrap();
        assert_eq!(file.0.len(), 1);
    }
}
