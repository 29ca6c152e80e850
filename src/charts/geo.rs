//! Country name matching
//! Resolves dataset region names to ISO 3166-1 alpha-3 codes for the map.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Lower-cased country name or alias -> alpha-3 code.
static COUNTRY_CODES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let entries: [(&str, &str); 96] = [
        ("afghanistan", "AFG"),
        ("albania", "ALB"),
        ("algeria", "DZA"),
        ("argentina", "ARG"),
        ("armenia", "ARM"),
        ("australia", "AUS"),
        ("austria", "AUT"),
        ("azerbaijan", "AZE"),
        ("bangladesh", "BGD"),
        ("belarus", "BLR"),
        ("belgium", "BEL"),
        ("bolivia", "BOL"),
        ("bosnia and herzegovina", "BIH"),
        ("brazil", "BRA"),
        ("bulgaria", "BGR"),
        ("burma", "MMR"),
        ("myanmar", "MMR"),
        ("cambodia", "KHM"),
        ("cameroon", "CMR"),
        ("canada", "CAN"),
        ("chile", "CHL"),
        ("china", "CHN"),
        ("colombia", "COL"),
        ("congo (kinshasa)", "COD"),
        ("congo (brazzaville)", "COG"),
        ("costa rica", "CRI"),
        ("croatia", "HRV"),
        ("cuba", "CUB"),
        ("cyprus", "CYP"),
        ("czechia", "CZE"),
        ("czech republic", "CZE"),
        ("denmark", "DNK"),
        ("dominican republic", "DOM"),
        ("ecuador", "ECU"),
        ("egypt", "EGY"),
        ("estonia", "EST"),
        ("ethiopia", "ETH"),
        ("finland", "FIN"),
        ("france", "FRA"),
        ("georgia", "GEO"),
        ("germany", "DEU"),
        ("ghana", "GHA"),
        ("greece", "GRC"),
        ("guatemala", "GTM"),
        ("hungary", "HUN"),
        ("iceland", "ISL"),
        ("india", "IND"),
        ("indonesia", "IDN"),
        ("iran", "IRN"),
        ("iraq", "IRQ"),
        ("ireland", "IRL"),
        ("israel", "ISR"),
        ("italy", "ITA"),
        ("japan", "JPN"),
        ("jordan", "JOR"),
        ("kazakhstan", "KAZ"),
        ("kenya", "KEN"),
        ("korea, south", "KOR"),
        ("south korea", "KOR"),
        ("korea, north", "PRK"),
        ("kuwait", "KWT"),
        ("latvia", "LVA"),
        ("lebanon", "LBN"),
        ("lithuania", "LTU"),
        ("malaysia", "MYS"),
        ("mexico", "MEX"),
        ("morocco", "MAR"),
        ("nepal", "NPL"),
        ("netherlands", "NLD"),
        ("new zealand", "NZL"),
        ("nigeria", "NGA"),
        ("norway", "NOR"),
        ("pakistan", "PAK"),
        ("panama", "PAN"),
        ("peru", "PER"),
        ("philippines", "PHL"),
        ("poland", "POL"),
        ("portugal", "PRT"),
        ("romania", "ROU"),
        ("russia", "RUS"),
        ("saudi arabia", "SAU"),
        ("serbia", "SRB"),
        ("singapore", "SGP"),
        ("slovakia", "SVK"),
        ("south africa", "ZAF"),
        ("spain", "ESP"),
        ("sweden", "SWE"),
        ("switzerland", "CHE"),
        ("taiwan*", "TWN"),
        ("taiwan", "TWN"),
        ("thailand", "THA"),
        ("turkey", "TUR"),
        ("ukraine", "UKR"),
        ("united kingdom", "GBR"),
        ("us", "USA"),
        ("united states", "USA"),
    ];
    entries.into_iter().collect()
});

/// Alpha-3 code for a region name, matched case-insensitively.
pub fn country_code(name: &str) -> Option<&'static str> {
    COUNTRY_CODES
        .get(name.trim().to_lowercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_dataset_names() {
        assert_eq!(country_code("US"), Some("USA"));
        assert_eq!(country_code("Korea, South"), Some("KOR"));
        assert_eq!(country_code("Taiwan*"), Some("TWN"));
        assert_eq!(country_code("Burma"), Some("MMR"));
    }

    #[test]
    fn matching_ignores_case_and_padding() {
        assert_eq!(country_code("  india "), Some("IND"));
        assert_eq!(country_code("GERMANY"), Some("DEU"));
    }

    #[test]
    fn unknown_names_are_unresolved() {
        assert_eq!(country_code("Diamond Princess"), None);
        assert_eq!(country_code(""), None);
    }
}
