//! Public-service categories carried by the reference directory.

use serde::{Deserialize, Serialize};

/// A class of public service.
///
/// Serialized names match the directory file's Japanese keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Labor standards office (労働基準監督署)
    #[serde(rename = "労基署")]
    LaborBureau,
    /// Police station
    #[serde(rename = "警察署")]
    Police,
    /// Municipal office (city/ward/town hall)
    #[serde(rename = "市区町村役所")]
    CityHall,
    /// Fire station
    #[serde(rename = "消防署")]
    Fire,
    /// Gas utility
    #[serde(rename = "ガス")]
    Gas,
    /// Electric utility
    #[serde(rename = "電力")]
    Electric,
    /// Hospital
    #[serde(rename = "病院")]
    Hospital,
    /// Public health center
    #[serde(rename = "保健所")]
    HealthCenter,
    /// Water utility
    #[serde(rename = "水道")]
    Water,
    /// Telecom (NTT)
    #[serde(rename = "NTT")]
    Telecom,
    /// Sewer utility
    #[serde(rename = "下水道")]
    Sewer,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::LaborBureau,
            Category::Police,
            Category::CityHall,
            Category::Fire,
            Category::Gas,
            Category::Electric,
            Category::Hospital,
            Category::HealthCenter,
            Category::Water,
            Category::Telecom,
            Category::Sewer,
        ]
    }

    /// Japanese display label, identical to the directory file key.
    pub fn label(&self) -> &'static str {
        match self {
            Category::LaborBureau => "労基署",
            Category::Police => "警察署",
            Category::CityHall => "市区町村役所",
            Category::Fire => "消防署",
            Category::Gas => "ガス",
            Category::Electric => "電力",
            Category::Hospital => "病院",
            Category::HealthCenter => "保健所",
            Category::Water => "水道",
            Category::Telecom => "NTT",
            Category::Sewer => "下水道",
        }
    }

    /// Emergency-service categories get a larger per-category result cap.
    pub fn is_emergency(&self) -> bool {
        matches!(self, Category::Police | Category::Fire | Category::Hospital)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for cat in Category::all() {
            let json = serde_json::to_string(cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.label()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *cat);
        }
    }

    #[test]
    fn test_emergency_split() {
        assert!(Category::Police.is_emergency());
        assert!(Category::Fire.is_emergency());
        assert!(Category::Hospital.is_emergency());
        assert!(!Category::Gas.is_emergency());
        assert!(!Category::CityHall.is_emergency());
    }
}
