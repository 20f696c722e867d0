use std::time::Duration;

use llama_client::{
    FeeSummaryDTO, HistoricalTvlPointDTO, JsonCache, LlamaApi, series_by_date, slug::api_slug,
};
use llama_types::{DayDate, FeeDataType};

use crate::{
    error::KpiError,
    fees::{FeeOutcome, annualize_fees},
    ranking::top_n,
    tvl_change::{TvlChange, tvl_delta},
};

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Pause after each historical TVL download.
    pub tvl_request_delay: Duration,
    /// Pause after each fee summary download.
    pub fee_request_delay: Duration,
    /// Read responses already present in the cache instead of downloading them again.
    pub reuse_cache: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            tvl_request_delay: Duration::from_secs(3),
            fee_request_delay: Duration::from_secs(2),
            reuse_cache: false,
        }
    }
}

/// Fetches DefiLlama data, round-trips per-chain and per-protocol responses
/// through the JSON cache and aggregates them.
pub struct MetricsService<A> {
    api: A,
    cache: JsonCache,
    config: ServiceConfig,
}

impl<A: LlamaApi> MetricsService<A> {
    pub const fn new(api: A, cache: JsonCache, config: ServiceConfig) -> Self {
        Self { api, cache, config }
    }

    /// Top `n` chains by current TVL.
    pub async fn top_chains(&self, n: usize) -> Result<Vec<(String, f64)>, KpiError> {
        let chains = self.api.get_chains().await?;
        tracing::info!("Fetched {} chains", chains.len());

        Ok(top_n(
            chains
                .into_iter()
                .filter_map(|chain| chain.tvl.map(|tvl| (chain.name, tvl))),
            n,
        ))
    }

    /// TVL change between `from` and `to` for every chain that has data at `to`,
    /// in the order of `chains`.
    pub async fn tvl_changes(
        &self,
        chains: &[String],
        from: DayDate,
        to: DayDate,
    ) -> Result<Vec<TvlChange>, KpiError> {
        let (from_ts, to_ts) = (from.unix_timestamp(), to.unix_timestamp());
        if from_ts > to_ts {
            return Err(KpiError::InvalidData(format!(
                "start date {from} is after end date {to}"
            )));
        }

        for chain in chains {
            let name = tvl_cache_name(chain);
            if self.is_cached(&name).await {
                tracing::debug!("Using cached TVL history for {chain}");
                continue;
            }
            let raw = self.api.get_historical_chain_tvl_raw(chain).await?;
            self.cache.store(&name, &raw).await?;
            tokio::time::sleep(self.config.tvl_request_delay).await;
        }

        let mut changes = Vec::with_capacity(chains.len());
        for chain in chains {
            let points: Vec<HistoricalTvlPointDTO> =
                self.cache.load(&tvl_cache_name(chain)).await?;
            let series = series_by_date(&points);

            match tvl_delta(chain, &series, from_ts, to_ts)? {
                Some(change) => {
                    if change.start_fallback {
                        tracing::info!(
                            "{chain} TVL change from {}: {}",
                            describe_day(change.start_timestamp),
                            change.change
                        );
                    } else {
                        tracing::info!("{chain} TVL change: {}", change.change);
                    }
                    changes.push(change);
                }
                None => {
                    tracing::warn!("Defined date range is not available for {chain}");
                }
            }
        }

        Ok(changes)
    }

    /// Top `n` protocols deployed on `chain` by their TVL there, centralized
    /// exchanges excluded.
    pub async fn top_protocols(
        &self,
        chain: &str,
        n: usize,
    ) -> Result<Vec<(String, f64)>, KpiError> {
        let protocols = self.api.get_protocols().await?;
        if protocols.is_empty() {
            tracing::warn!("No data available for {chain}");
            return Ok(Vec::new());
        }

        let on_chain = protocols
            .into_iter()
            .filter(|protocol| !protocol.is_cex())
            .filter_map(|protocol| {
                protocol
                    .chain_tvl(chain)
                    .map(|tvl| (protocol.name, tvl))
            });

        Ok(top_n(on_chain, n))
    }

    /// Annualized fees on `chain` for each protocol that recorded any,
    /// in the order of `protocols`.
    pub async fn annualized_fees(
        &self,
        protocols: &[String],
        chain: &str,
        data_type: FeeDataType,
    ) -> Result<Vec<(String, f64)>, KpiError> {
        let mut fees = Vec::with_capacity(protocols.len());

        for protocol in protocols {
            let name = fee_cache_name(protocol, data_type);
            if self.is_cached(&name).await {
                tracing::debug!("Using cached fee summary for {protocol}");
            } else {
                let slug = api_slug(protocol);
                // `null` is stored for protocols without a summary
                let raw = self.api.get_fee_summary_raw(&slug, data_type).await?;
                self.cache.store(&name, &raw).await?;
                tokio::time::sleep(self.config.fee_request_delay).await;
            }

            let summary: Option<FeeSummaryDTO> = self.cache.load(&name).await?;
            let outcome = summary.map_or(FeeOutcome::NoSummary, |summary| {
                annualize_fees(&summary, chain, protocol)
            });

            match outcome {
                FeeOutcome::NoSummary => {
                    tracing::info!("{protocol} has no {} summary", data_type.label());
                }
                FeeOutcome::NoFees => {
                    tracing::info!("{protocol} has no {} on {chain}", data_type.label());
                }
                FeeOutcome::Annualized {
                    annualized,
                    observations,
                    ..
                } => {
                    tracing::debug!(
                        "{protocol}: {annualized} annualized over {observations} days on {chain}"
                    );
                    fees.push((protocol.clone(), annualized));
                }
            }
        }

        Ok(fees)
    }

    async fn is_cached(&self, name: &str) -> bool {
        self.config.reuse_cache && self.cache.contains(name).await
    }
}

fn tvl_cache_name(chain: &str) -> String {
    format!("tvl-{chain}")
}

fn fee_cache_name(protocol: &str, data_type: FeeDataType) -> String {
    format!("{data_type}-{protocol}")
}

fn describe_day(timestamp: i64) -> String {
    DayDate::from_unix_timestamp(timestamp).map_or_else(|_| timestamp.to_string(), |d| d.to_string())
}
