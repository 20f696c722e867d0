use std::{path::PathBuf, time::Duration};

use clap::Parser;
use llama_client::DEFAULT_API_ENDPOINT;
use llama_kpi::ServiceConfig;
use llama_types::{DayDate, FeeDataType};

use crate::report::ReportParams;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct LlamaCli {
    /// DefiLlama API base url
    #[arg(long, env = "LLAMA_API_URL", default_value = DEFAULT_API_ENDPOINT)]
    pub api_url: String,

    /// Number of chains and protocols to rank
    #[arg(long, env = "LLAMA_TOP_N", default_value = "10")]
    pub top_n: usize,

    /// Chain whose protocols are ranked and whose fees are annualized
    #[arg(long, env = "LLAMA_CHAIN", default_value = "Arbitrum")]
    pub chain: String,

    /// Start of the TVL change window (DD-MM-YYYY)
    #[arg(long, env = "LLAMA_FROM", default_value = "01-01-2023")]
    pub from: DayDate,

    /// End of the TVL change window (DD-MM-YYYY)
    #[arg(long, env = "LLAMA_TO", default_value = "30-06-2023")]
    pub to: DayDate,

    /// Directory holding the raw API responses
    #[arg(long, env = "LLAMA_CACHE_DIR", default_value = ".llama-cache")]
    pub cache_dir: PathBuf,

    /// Directory receiving the SVG charts and report.json
    #[arg(long, env = "LLAMA_OUTPUT_DIR", default_value = "charts")]
    pub output_dir: PathBuf,

    /// Pause after each historical TVL request, in seconds
    #[arg(long, env = "LLAMA_TVL_REQUEST_DELAY_SECS", default_value = "3")]
    pub tvl_request_delay_secs: u64,

    /// Pause after each fee summary request, in seconds
    #[arg(long, env = "LLAMA_FEE_REQUEST_DELAY_SECS", default_value = "2")]
    pub fee_request_delay_secs: u64,

    /// HTTP request timeout, in seconds
    #[arg(long, env = "LLAMA_HTTP_TIMEOUT_SECS", default_value = "30")]
    pub http_timeout_secs: u64,

    /// Fee series to annualize (dailyFees, dailyRevenue, dailyHoldersRevenue)
    #[arg(long, env = "LLAMA_FEE_DATA_TYPE", default_value = "dailyFees")]
    pub fee_data_type: FeeDataType,

    /// Read responses already in the cache directory instead of downloading them
    #[arg(long)]
    pub reuse_cache: bool,

    /// Skip SVG rendering
    #[arg(long)]
    pub no_charts: bool,
}

impl LlamaCli {
    pub const fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub const fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            tvl_request_delay: Duration::from_secs(self.tvl_request_delay_secs),
            fee_request_delay: Duration::from_secs(self.fee_request_delay_secs),
            reuse_cache: self.reuse_cache,
        }
    }

    pub fn report_params(&self) -> ReportParams {
        ReportParams {
            top_n: self.top_n,
            chain: self.chain.clone(),
            from: self.from,
            to: self.to,
            fee_data_type: self.fee_data_type,
        }
    }
}
