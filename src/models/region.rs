//! Administrative region key (prefecture / city / district).

use serde::{Deserialize, Serialize};

/// The (prefecture, city, district) triple identifying an administrative area.
///
/// Components the address parser could not determine are empty strings, never
/// errors; every consumer tolerates missing city/district. A blank district on
/// a directory entry marks it city-wide rather than district-scoped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub prefecture: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub district: String,
}

impl Region {
    pub fn new(prefecture: &str, city: &str, district: &str) -> Self {
        Self {
            prefecture: prefecture.to_string(),
            city: city.to_string(),
            district: district.to_string(),
        }
    }

    /// True when the district slot is blank (city-wide scope).
    pub fn is_city_wide(&self) -> bool {
        self.district.is_empty()
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.district.is_empty() {
            write!(f, "{} > {}", self.prefecture, self.city)
        } else {
            write!(f, "{} > {} > {}", self.prefecture, self.city, self.district)
        }
    }
}
