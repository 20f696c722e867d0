pub mod error;
pub mod fees;
pub mod ranking;
pub mod service;
pub mod tvl_change;

pub use error::KpiError;
pub use fees::{DAYS_PER_YEAR, FeeOutcome, annualize_fees};
pub use ranking::top_n;
pub use service::{MetricsService, ServiceConfig};
pub use tvl_change::{TvlChange, tvl_delta};
