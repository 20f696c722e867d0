mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use llama_charts::ChartStyle;
use llama_client::{JsonCache, LlamaClient};
use llama_kpi::MetricsService;
use tracing_subscriber::EnvFilter;

use crate::{cli::LlamaCli, report::Report};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let cli = LlamaCli::parse();
    init_tracing();

    let client = LlamaClient::new(&cli.api_url, cli.http_timeout())?;
    let service = MetricsService::new(
        client,
        JsonCache::new(&cli.cache_dir),
        cli.service_config(),
    );

    let report = Report::collect(&service, cli.report_params()).await?;
    report.print();

    if cli.no_charts {
        tracing::info!("Chart rendering disabled");
    } else {
        report.write_charts(&cli.output_dir, &ChartStyle::default())?;
    }
    report.write_json(&cli.output_dir.join("report.json"))?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
