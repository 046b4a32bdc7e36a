//! Japanese address component extraction.
//!
//! Splits a free-form address into prefecture, city, and district. Components
//! that cannot be determined come back as empty strings; downstream code
//! treats those as reduced-affinity queries rather than failures.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::Region;

fn prefecture_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(東京都|北海道|京都府|大阪府|\p{Han}{2,3}県)").unwrap())
}

fn city_res() -> &'static [Regex; 4] {
    static RES: OnceLock<[Regex; 4]> = OnceLock::new();
    RES.get_or_init(|| {
        // Special wards first, then cities, towns, villages.
        [
            Regex::new(r"^([^市区町村]+区)").unwrap(),
            Regex::new(r"^([^市区町村]+市)").unwrap(),
            Regex::new(r"^([^市区町村]+町)").unwrap(),
            Regex::new(r"^([^市区町村]+村)").unwrap(),
        ]
    })
}

fn ward_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^市区町村]+区)").unwrap())
}

/// Parse prefecture / city / district out of a raw address string.
///
/// Total: unparseable components yield empty strings, never an error. For
/// designated cities (…市) a trailing ward (…区) becomes the district, e.g.
/// 横浜市鶴見区.
pub fn parse_address(raw: &str) -> Region {
    let address: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let (prefecture, remaining) = match prefecture_re().find(&address) {
        Some(m) => (m.as_str().to_string(), &address[m.end()..]),
        None => (String::new(), address.as_str()),
    };

    let mut city = String::new();
    let mut district = String::new();

    for re in city_res() {
        if let Some(caps) = re.captures(remaining) {
            let matched = caps.get(1).unwrap();
            city = matched.as_str().to_string();
            if city.ends_with('市') {
                let after_city = &remaining[matched.end()..];
                if let Some(ward) = ward_re().captures(after_city) {
                    district = ward[1].to_string();
                }
            }
            break;
        }
    }

    Region {
        prefecture,
        city,
        district,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokyo_special_ward() {
        let r = parse_address("東京都渋谷区神宮前1-1-1");
        assert_eq!(r.prefecture, "東京都");
        assert_eq!(r.city, "渋谷区");
        assert_eq!(r.district, "");
    }

    #[test]
    fn test_designated_city_with_ward() {
        let r = parse_address("神奈川県横浜市鶴見区鶴見中央4-1-1");
        assert_eq!(r.prefecture, "神奈川県");
        assert_eq!(r.city, "横浜市");
        assert_eq!(r.district, "鶴見区");
    }

    #[test]
    fn test_prefecture_capital() {
        let r = parse_address("山梨県甲府市丸の内1-18-1");
        assert_eq!(r.prefecture, "山梨県");
        assert_eq!(r.city, "甲府市");
        assert_eq!(r.district, "");
    }

    #[test]
    fn test_whitespace_stripped() {
        let r = parse_address("東京都 足立区 竹の塚6-8-1");
        assert_eq!(r.city, "足立区");
    }

    #[test]
    fn test_town() {
        let r = parse_address("広島県安芸郡府中町大通3-5-1");
        assert_eq!(r.prefecture, "広島県");
        // Counties collapse into the town name match.
        assert!(r.city.ends_with('町'));
    }

    #[test]
    fn test_unparseable_components_empty() {
        let r = parse_address("somewhere else entirely");
        assert_eq!(r.prefecture, "");
        assert_eq!(r.city, "");
        assert_eq!(r.district, "");
    }
}
