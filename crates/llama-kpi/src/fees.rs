use llama_client::{FeeSummaryDTO, slug};
use llama_types::chain_key;

pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, PartialEq)]
pub enum FeeOutcome {
    /// The API returned no `totalDataChart` for the protocol.
    NoSummary,
    /// The protocol has a summary but nothing was recorded on the chain.
    NoFees,
    Annualized {
        daily_mean: f64,
        annualized: f64,
        observations: usize,
    },
}

/// Mean daily value of `protocol` on `chain`, scaled to a year.
///
/// Only days whose breakdown lists the protocol on the chain count as observations.
pub fn annualize_fees(summary: &FeeSummaryDTO, chain: &str, protocol: &str) -> FeeOutcome {
    if summary.total_data_chart.is_none() {
        return FeeOutcome::NoSummary;
    }

    let chain_key = chain_key(chain);
    let protocol_key = slug::breakdown_key(protocol);

    let (sum, observations) = summary
        .total_data_chart_breakdown
        .iter()
        .flatten()
        .filter_map(|(_, breakdown)| breakdown.get(&chain_key))
        .filter_map(|entries| slug::find_breakdown_value(entries, &protocol_key))
        .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));

    if observations == 0 || sum == 0.0 {
        return FeeOutcome::NoFees;
    }

    let daily_mean = sum / observations as f64;
    FeeOutcome::Annualized {
        daily_mean,
        annualized: daily_mean * DAYS_PER_YEAR,
        observations,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn summary(value: serde_json::Value) -> FeeSummaryDTO {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_annualized_mean() {
        let summary = summary(json!({
            "totalDataChart": [[1, 0.0], [2, 0.0], [3, 0.0]],
            "totalDataChartBreakdown": [
                [1, { "arbitrum": { "gmx": 100.0 }, "avax": { "gmx": 999.0 } }],
                [2, { "avax": { "gmx": 999.0 } }],
                [3, { "arbitrum": { "gmx": 300.0 } }]
            ]
        }));

        assert_eq!(
            annualize_fees(&summary, "Arbitrum", "GMX"),
            FeeOutcome::Annualized {
                daily_mean: 200.0,
                annualized: 200.0 * 365.0,
                observations: 2,
            }
        );
    }

    #[test]
    fn test_override_key() {
        let summary = summary(json!({
            "totalDataChart": [],
            "totalDataChartBreakdown": [[1, { "arbitrum": { "curve": 10.0 } }]]
        }));
        assert!(matches!(
            annualize_fees(&summary, "Arbitrum", "Curve DEX"),
            FeeOutcome::Annualized { observations: 1, .. }
        ));
    }

    #[test]
    fn test_missing_summary() {
        let summary = summary(json!({ "totalDataChartBreakdown": [] }));
        assert_eq!(annualize_fees(&summary, "Arbitrum", "GMX"), FeeOutcome::NoSummary);
    }

    #[test]
    fn test_no_fees_on_chain() {
        let zero = summary(json!({
            "totalDataChart": [[1, 0.0]],
            "totalDataChartBreakdown": [[1, { "arbitrum": { "gmx": 0.0 } }]]
        }));
        assert_eq!(annualize_fees(&zero, "Arbitrum", "GMX"), FeeOutcome::NoFees);

        let elsewhere = summary(json!({
            "totalDataChart": [[1, 5.0]],
            "totalDataChartBreakdown": [[1, { "ethereum": { "gmx": 5.0 } }]]
        }));
        assert_eq!(annualize_fees(&elsewhere, "Arbitrum", "GMX"), FeeOutcome::NoFees);

        let no_breakdown = summary(json!({ "totalDataChart": [[1, 5.0]] }));
        assert_eq!(annualize_fees(&no_breakdown, "Arbitrum", "GMX"), FeeOutcome::NoFees);
    }
}
