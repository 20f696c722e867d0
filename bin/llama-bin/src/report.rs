use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use llama_charts::{BarSeries, ChartError, ChartStyle, render_bar_chart, render_panels, write_svg};
use llama_client::LlamaApi;
use llama_kpi::{MetricsService, TvlChange};
use llama_types::{DayDate, FeeDataType, format_usd};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ReportParams {
    pub top_n: usize,
    pub chain: String,
    pub from: DayDate,
    pub to: DayDate,
    pub fee_data_type: FeeDataType,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedValue {
    pub name: String,
    pub value: f64,
    pub formatted: String,
}

impl From<(String, f64)> for RankedValue {
    fn from((name, value): (String, f64)) -> Self {
        Self {
            name,
            value,
            formatted: format_usd(value),
        }
    }
}

/// Everything one run produces, written to `report.json`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub chain: String,
    pub from: DayDate,
    pub to: DayDate,
    pub fee_data_type: FeeDataType,
    pub top_chains: Vec<RankedValue>,
    pub tvl_changes: Vec<TvlChange>,
    pub top_protocols: Vec<RankedValue>,
    pub annualized_fees: Vec<RankedValue>,
}

impl Report {
    pub async fn collect<A: LlamaApi>(
        service: &MetricsService<A>,
        params: ReportParams,
    ) -> Result<Self> {
        let ReportParams {
            top_n,
            chain,
            from,
            to,
            fee_data_type,
        } = params;

        let top_chains = service.top_chains(top_n).await?;
        let chain_names = names(&top_chains);
        let tvl_changes = service.tvl_changes(&chain_names, from, to).await?;

        let top_protocols = service.top_protocols(&chain, top_n).await?;
        let protocol_names = names(&top_protocols);
        let annualized_fees = service
            .annualized_fees(&protocol_names, &chain, fee_data_type)
            .await?;

        Ok(Self {
            generated_at: Utc::now(),
            chain,
            from,
            to,
            fee_data_type,
            top_chains: top_chains.into_iter().map(Into::into).collect(),
            tvl_changes,
            top_protocols: top_protocols.into_iter().map(Into::into).collect(),
            annualized_fees: annualized_fees.into_iter().map(Into::into).collect(),
        })
    }

    pub fn print(&self) {
        print_ranking("Top chains by TVL", &self.top_chains);

        println!("\nChange in TVL ({} to {})", self.from, self.to);
        if self.tvl_changes.is_empty() {
            println!("  no chain covers the requested dates");
        }
        for change in &self.tvl_changes {
            let since = if change.start_fallback {
                DayDate::from_unix_timestamp(change.start_timestamp)
                    .map(|d| format!(" (since {d})"))
                    .unwrap_or_default()
            } else {
                String::new()
            };
            println!(
                "  {:<24} {:>14}{since}",
                change.chain,
                format_usd(change.change)
            );
        }

        print_ranking(
            &format!("Top protocols on {} by TVL", self.chain),
            &self.top_protocols,
        );
        print_ranking(
            &format!(
                "Annualized {} on {}",
                self.fee_data_type.label(),
                self.chain
            ),
            &self.annualized_fees,
        );
    }

    /// Chart file names and their SVG documents.
    pub fn render_charts(
        &self,
        style: &ChartStyle,
    ) -> Result<Vec<(&'static str, String)>, ChartError> {
        let chain_tvl = BarSeries::new(
            "TVL by Chain",
            "Chain",
            "TVL (USD)",
            bars(&self.top_chains),
        );
        let chain_change = BarSeries::new(
            format!("Change in TVL by Chain ({} to {})", self.from, self.to),
            "Chain",
            "Change in TVL (USD)",
            self.tvl_changes
                .iter()
                .map(|change| (change.chain.clone(), change.change))
                .collect(),
        );
        let protocol_tvl = BarSeries::new(
            format!("TVL by Protocol on {}", self.chain),
            "Protocol",
            "TVL (USD)",
            bars(&self.top_protocols),
        );
        let protocol_fees = BarSeries::new(
            format!(
                "Annualized {} by Protocol on {}",
                self.fee_data_type.label(),
                self.chain
            ),
            "Protocol",
            format!("Annualized {} (USD)", self.fee_data_type.label()),
            bars(&self.annualized_fees),
        );

        Ok(vec![
            ("tvl_by_chain.svg", render_bar_chart(&chain_tvl, style)?),
            ("tvl_change_by_chain.svg", render_bar_chart(&chain_change, style)?),
            ("tvl_by_protocol.svg", render_bar_chart(&protocol_tvl, style)?),
            (
                "annualized_fees_by_protocol.svg",
                render_bar_chart(&protocol_fees, style)?,
            ),
            (
                "chains_overview.svg",
                render_panels(&[chain_tvl, chain_change], style)?,
            ),
            (
                "protocols_overview.svg",
                render_panels(&[protocol_tvl, protocol_fees], style)?,
            ),
        ])
    }

    pub fn write_charts(&self, dir: &Path, style: &ChartStyle) -> Result<()> {
        for (file_name, svg) in self.render_charts(style)? {
            write_svg(&dir.join(file_name), &svg)?;
        }
        Ok(())
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Wrote report {}", path.display());
        Ok(())
    }
}

fn names(ranking: &[(String, f64)]) -> Vec<String> {
    ranking.iter().map(|(name, _)| name.clone()).collect()
}

fn bars(values: &[RankedValue]) -> Vec<(String, f64)> {
    values.iter().map(|v| (v.name.clone(), v.value)).collect()
}

fn print_ranking(title: &str, values: &[RankedValue]) {
    println!("\n{title}");
    if values.is_empty() {
        println!("  no data");
    }
    for (rank, value) in values.iter().enumerate() {
        println!("  {:>2}. {:<24} {:>14}", rank + 1, value.name, value.formatted);
    }
}
