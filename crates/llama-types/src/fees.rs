use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Series requested from the `summary/fees` endpoint through its `dataType` parameter.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    Hash,
    Eq,
    PartialEq,
    Display,
    AsRefStr,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum FeeDataType {
    #[default]
    #[strum(serialize = "dailyFees")]
    DailyFees,
    #[strum(serialize = "dailyRevenue")]
    DailyRevenue,
    #[strum(serialize = "dailyHoldersRevenue")]
    DailyHoldersRevenue,
}

impl FeeDataType {
    /// Human readable name used in chart titles and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::DailyFees => "Fees",
            Self::DailyRevenue => "Revenue",
            Self::DailyHoldersRevenue => "Holders Revenue",
        }
    }
}
