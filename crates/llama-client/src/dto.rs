use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category DefiLlama assigns to centralized exchanges.
pub const CEX_CATEGORY: &str = "CEX";

/// Entry of `GET /v2/chains`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainTvlDTO {
    pub name: String,
    #[serde(default)]
    pub tvl: Option<f64>,
}

/// Entry of `GET /v2/historicalChainTvl/{chain}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistoricalTvlPointDTO {
    pub date: i64, // unix timestamp, UTC midnight
    pub tvl: f64,
}

/// Collapses a historical series into a timestamp -> TVL map.
/// Later points win when the API repeats a timestamp.
pub fn series_by_date(points: &[HistoricalTvlPointDTO]) -> BTreeMap<i64, f64> {
    points.iter().map(|p| (p.date, p.tvl)).collect()
}

/// Entry of `GET /protocols`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolDTO {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Chain name -> TVL. Also carries derived keys such as `"Ethereum-staking"`.
    #[serde(rename = "chainTvls", default)]
    pub chain_tvls: HashMap<String, Value>,
}

impl ProtocolDTO {
    pub fn is_cex(&self) -> bool {
        self.category.as_deref() == Some(CEX_CATEGORY)
    }

    /// TVL on `chain`, if the protocol is deployed there and the value is numeric.
    pub fn chain_tvl(&self, chain: &str) -> Option<f64> {
        self.chain_tvls.get(chain).and_then(Value::as_f64)
    }
}

/// Chain key -> sub-protocol -> value for one day.
pub type FeeBreakdown = HashMap<String, HashMap<String, f64>>;

/// Response of `GET /summary/fees/{protocol}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSummaryDTO {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_data_chart: Option<Vec<(i64, f64)>>,
    #[serde(default)]
    pub total_data_chart_breakdown: Option<Vec<(i64, FeeBreakdown)>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_protocol_chain_tvl() {
        let protocol: ProtocolDTO = serde_json::from_value(json!({
            "name": "GMX",
            "category": "Derivatives",
            "chainTvls": { "Arbitrum": 550_000_000.0, "Avalanche": null },
            "tvl": 600_000_000.0
        }))
        .unwrap();

        assert!(!protocol.is_cex());
        assert_eq!(protocol.chain_tvl("Arbitrum"), Some(550_000_000.0));
        assert_eq!(protocol.chain_tvl("Avalanche"), None);
        assert_eq!(protocol.chain_tvl("Ethereum"), None);
    }

    #[test]
    fn test_protocol_without_category() {
        let protocol: ProtocolDTO =
            serde_json::from_value(json!({ "name": "Binance CEX", "category": "CEX" })).unwrap();
        assert!(protocol.is_cex());
        assert!(protocol.chain_tvls.is_empty());
    }

    #[test]
    fn test_fee_summary_breakdown() {
        let summary: FeeSummaryDTO = serde_json::from_value(json!({
            "name": "GMX",
            "totalDataChart": [[1_688_083_200, 120_000.0]],
            "totalDataChartBreakdown": [
                [1_688_083_200, { "arbitrum": { "gmx": 100_000.0 }, "avax": { "gmx": 20_000.0 } }]
            ]
        }))
        .unwrap();

        let breakdown = summary.total_data_chart_breakdown.unwrap();
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].1["arbitrum"]["gmx"], 100_000.0);
    }

    #[test]
    fn test_fee_summary_missing_charts() {
        let summary: FeeSummaryDTO =
            serde_json::from_value(json!({ "message": "protocol not found" })).unwrap();
        assert!(summary.total_data_chart.is_none());
        assert!(summary.total_data_chart_breakdown.is_none());
    }

    #[test]
    fn test_series_by_date_keeps_last_duplicate() {
        let points = [
            HistoricalTvlPointDTO { date: 10, tvl: 1.0 },
            HistoricalTvlPointDTO { date: 20, tvl: 2.0 },
            HistoricalTvlPointDTO { date: 10, tvl: 3.0 },
        ];
        let series = series_by_date(&points);
        assert_eq!(series.len(), 2);
        assert_eq!(series[&10], 3.0);
    }
}
