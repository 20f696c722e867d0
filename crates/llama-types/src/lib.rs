pub mod chain;
pub mod date;
pub mod fees;
pub mod usd;

pub use chain::chain_key;
pub use date::{DateError, DayDate, date_to_unix_time, unix_time_to_date};
pub use fees::FeeDataType;
pub use usd::format_usd;
