use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::KpiError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvlChange {
    pub chain: String,
    pub start_timestamp: i64,
    pub end_timestamp: i64,
    pub start_tvl: f64,
    pub end_tvl: f64,
    pub change: f64,
    /// The series has no point at the requested start, `start_timestamp`
    /// is the substitute that was used.
    pub start_fallback: bool,
}

/// TVL difference between `to` and `from` (unix timestamps at UTC midnight).
///
/// Returns `Ok(None)` when the series has no point at `to`. When `from` is
/// missing, the earliest point of the series is used instead.
pub fn tvl_delta(
    chain: &str,
    series: &BTreeMap<i64, f64>,
    from: i64,
    to: i64,
) -> Result<Option<TvlChange>, KpiError> {
    if from > to {
        return Err(KpiError::InvalidData(format!(
            "start timestamp {from} is after end timestamp {to}"
        )));
    }

    let Some(&end_tvl) = series.get(&to) else {
        return Ok(None);
    };

    let (start_timestamp, start_tvl, start_fallback) = if let Some(&tvl) = series.get(&from) {
        (from, tvl, false)
    } else {
        let Some((&timestamp, &tvl)) = series.iter().next() else {
            return Ok(None);
        };
        (timestamp, tvl, true)
    };

    Ok(Some(TvlChange {
        chain: chain.to_string(),
        start_timestamp,
        end_timestamp: to,
        start_tvl,
        end_tvl,
        change: end_tvl - start_tvl,
        start_fallback,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    const JAN_1: i64 = 1_672_531_200;

    fn daily_series(start: i64, values: &[f64]) -> BTreeMap<i64, f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (start + i as i64 * DAY, *v))
            .collect()
    }

    #[test]
    fn test_exact_dates() {
        let series = daily_series(JAN_1, &[100.0, 110.0, 95.0, 130.0]);
        let change = tvl_delta("Arbitrum", &series, JAN_1 + DAY, JAN_1 + 3 * DAY)
            .unwrap()
            .unwrap();
        assert_eq!(change.start_tvl, 110.0);
        assert_eq!(change.end_tvl, 130.0);
        assert_eq!(change.change, 20.0);
        assert!(!change.start_fallback);
    }

    #[test]
    fn test_start_before_coverage_uses_earliest_point() {
        let series = daily_series(JAN_1 + 10 * DAY, &[50.0, 60.0, 80.0]);
        let change = tvl_delta("Base", &series, JAN_1, JAN_1 + 12 * DAY)
            .unwrap()
            .unwrap();
        assert_eq!(change.start_timestamp, JAN_1 + 10 * DAY);
        assert_eq!(change.change, 30.0);
        assert!(change.start_fallback);
    }

    #[test]
    fn test_gap_at_start_uses_earliest_point() {
        let mut series = daily_series(JAN_1, &[10.0, 20.0, 30.0, 40.0]);
        series.remove(&(JAN_1 + 2 * DAY));
        let change = tvl_delta("Arbitrum", &series, JAN_1 + 2 * DAY, JAN_1 + 3 * DAY)
            .unwrap()
            .unwrap();
        assert_eq!(change.start_timestamp, JAN_1);
        assert_eq!(change.start_tvl, 10.0);
        assert_eq!(change.change, 30.0);
        assert!(change.start_fallback);
    }

    #[test]
    fn test_missing_end_date() {
        let series = daily_series(JAN_1, &[10.0, 20.0]);
        assert_eq!(tvl_delta("Arbitrum", &series, JAN_1, JAN_1 + 5 * DAY).unwrap(), None);
        assert_eq!(tvl_delta("Arbitrum", &BTreeMap::new(), JAN_1, JAN_1).unwrap(), None);
    }

    #[test]
    fn test_same_day_is_zero() {
        let series = daily_series(JAN_1, &[10.0]);
        let change = tvl_delta("Arbitrum", &series, JAN_1, JAN_1).unwrap().unwrap();
        assert_eq!(change.change, 0.0);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let series = daily_series(JAN_1, &[10.0, 20.0]);
        assert!(matches!(
            tvl_delta("Arbitrum", &series, JAN_1 + DAY, JAN_1),
            Err(KpiError::InvalidData(_))
        ));
    }
}
