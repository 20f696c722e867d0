//! Mapping between protocol display names (as listed by `/protocols`) and the
//! identifiers the fee endpoints expect.

use std::collections::HashMap;

/// Breakdown keys that differ from the display name by more than letter case.
const BREAKDOWN_OVERRIDES: &[(&str, &str)] = &[("Curve DEX", "curve")];

/// Path segment for `/summary/fees/{slug}`.
///
/// Versioned names resolve to the parent protocol (`"Uniswap V3"` -> `"uniswap"`),
/// remaining spaces become dashes (`"Trader Joe"` -> `"trader-joe"`).
pub fn api_slug(protocol: &str) -> String {
    let name = protocol.trim();
    let parent = if name.contains("V2") || name.contains("V3") {
        name.get(..name.len().saturating_sub(3))
            .unwrap_or(name)
            .trim_end()
    } else {
        name
    };

    parent.replace(' ', "-").to_lowercase()
}

/// Sub-protocol key under which the protocol's own fees are filed in a
/// `totalDataChartBreakdown` entry.
pub fn breakdown_key(protocol: &str) -> String {
    BREAKDOWN_OVERRIDES
        .iter()
        .find(|(name, _)| *name == protocol)
        .map_or_else(|| protocol.to_string(), |(_, key)| (*key).to_string())
}

/// Looks `key` up in one day of a chain breakdown, exact match first, then
/// ignoring ASCII case (`"GMX"` is filed as `"gmx"`).
pub fn find_breakdown_value(entries: &HashMap<String, f64>, key: &str) -> Option<f64> {
    entries.get(key).copied().or_else(|| {
        entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| *value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_slug() {
        assert_eq!(api_slug("Uniswap V3"), "uniswap");
        assert_eq!(api_slug("SushiSwap V2"), "sushiswap");
        assert_eq!(api_slug("Curve DEX"), "curve-dex");
        assert_eq!(api_slug("Trader Joe DEX"), "trader-joe-dex");
        assert_eq!(api_slug("GMX"), "gmx");
        assert_eq!(api_slug("Balancer Boosted V2"), "balancer-boosted");
    }

    #[test]
    fn test_breakdown_key() {
        assert_eq!(breakdown_key("Curve DEX"), "curve");
        assert_eq!(breakdown_key("GMX"), "GMX");
        assert_eq!(breakdown_key("Uniswap V3"), "Uniswap V3");
    }

    #[test]
    fn test_find_breakdown_value() {
        let entries = HashMap::from([
            ("gmx".to_string(), 10.0),
            ("Uniswap V3".to_string(), 5.0),
        ]);
        assert_eq!(find_breakdown_value(&entries, "Uniswap V3"), Some(5.0));
        assert_eq!(find_breakdown_value(&entries, "GMX"), Some(10.0));
        assert_eq!(find_breakdown_value(&entries, "Stargate"), None);
    }
}
