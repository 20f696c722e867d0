use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Calendar format accepted on the command line and printed in reports.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date `{0}`, expected DD-MM-YYYY")]
    InvalidFormat(String),
    #[error("Unix timestamp {0} is out of range")]
    OutOfRange(i64),
}

/// A calendar day, always interpreted at UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayDate(NaiveDate);

impl DayDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_unix_timestamp(timestamp: i64) -> Result<Self, DateError> {
        DateTime::from_timestamp(timestamp, 0)
            .map(|dt| Self(dt.date_naive()))
            .ok_or(DateError::OutOfRange(timestamp))
    }

    pub fn unix_timestamp(self) -> i64 {
        self.0.and_time(NaiveTime::MIN).and_utc().timestamp()
    }
}

impl FromStr for DayDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for DayDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayDate> for String {
    fn from(value: DayDate) -> Self {
        value.to_string()
    }
}

/// Converts a `DD-MM-YYYY` date to the unix timestamp of its UTC midnight.
pub fn date_to_unix_time(date: &str) -> Result<i64, DateError> {
    date.parse::<DayDate>().map(DayDate::unix_timestamp)
}

/// Converts a unix timestamp to the `DD-MM-YYYY` date it falls on (UTC).
pub fn unix_time_to_date(timestamp: i64) -> Result<String, DateError> {
    DayDate::from_unix_timestamp(timestamp).map(|date| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_to_unix_time() {
        assert_eq!(date_to_unix_time("01-01-2023").unwrap(), 1_672_531_200);
        assert_eq!(date_to_unix_time("30-06-2023").unwrap(), 1_688_083_200);
    }

    #[test]
    fn test_round_trip_at_utc_midnight() {
        let timestamp = date_to_unix_time("15-03-2024").unwrap();
        assert_eq!(timestamp % 86_400, 0);
        assert_eq!(unix_time_to_date(timestamp).unwrap(), "15-03-2024");
    }

    #[test]
    fn test_unix_time_within_day() {
        // Any second of the day maps back to the same calendar date
        assert_eq!(unix_time_to_date(1_672_531_200 + 86_399).unwrap(), "01-01-2023");
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(
            date_to_unix_time("2023-01-01"),
            Err(DateError::InvalidFormat("2023-01-01".to_string()))
        );
        assert!(date_to_unix_time("31-02-2023").is_err());
        assert!(date_to_unix_time("").is_err());
        assert_eq!(unix_time_to_date(i64::MAX), Err(DateError::OutOfRange(i64::MAX)));
    }

    #[test]
    fn test_day_date_serde() {
        let date = DayDate::from_ymd(2023, 6, 30).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"30-06-2023\"");
        let back: DayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
