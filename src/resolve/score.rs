//! Administrative-affinity scoring.

use crate::models::Region;

use super::ResolveConfig;

/// Affinity bonus between a facility's registered region and the caller's.
///
/// Same city earns the large bonus; a matching district on top of that earns
/// the extra one. Blank caller components never match, so prefecture-wide
/// entries stay lower-affinity.
pub fn priority_score(source: &Region, caller: &Region, config: &ResolveConfig) -> i32 {
    let mut score = 0;
    if !caller.city.is_empty() && source.city == caller.city {
        score += config.city_bonus;
        if !caller.district.is_empty() && source.district == caller.district {
            score += config.district_bonus;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_and_district_bonuses() {
        let cfg = ResolveConfig::default();
        let caller = Region::new("神奈川県", "横浜市", "鶴見区");

        let same_district = Region::new("神奈川県", "横浜市", "鶴見区");
        let same_city = Region::new("神奈川県", "横浜市", "");
        let other_city = Region::new("神奈川県", "川崎市", "");

        assert_eq!(priority_score(&same_district, &caller, &cfg), 150);
        assert_eq!(priority_score(&same_city, &caller, &cfg), 100);
        assert_eq!(priority_score(&other_city, &caller, &cfg), 0);
    }

    #[test]
    fn test_blank_caller_city_never_matches() {
        let cfg = ResolveConfig::default();
        let caller = Region::new("東京都", "", "");
        let wide = Region::new("東京都", "", "");
        assert_eq!(priority_score(&wide, &caller, &cfg), 0);
    }
}
