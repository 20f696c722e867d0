use llama_types::FeeDataType;
use serde_json::Value;

use crate::{
    dto::{ChainTvlDTO, FeeSummaryDTO, HistoricalTvlPointDTO, ProtocolDTO},
    error::LlamaApiError,
};

/// Read access to the DefiLlama endpoints.
///
/// Implementors only provide the raw JSON bodies, which is what gets written
/// to the file cache. The typed accessors decode them.
#[async_trait::async_trait]
pub trait LlamaApi: Send + Sync {
    async fn get_chains_raw(&self) -> Result<Value, LlamaApiError>;

    async fn get_historical_chain_tvl_raw(&self, chain: &str) -> Result<Value, LlamaApiError>;

    async fn get_protocols_raw(&self) -> Result<Value, LlamaApiError>;

    /// `None` when the API has no fee summary for `slug`.
    async fn get_fee_summary_raw(
        &self,
        slug: &str,
        data_type: FeeDataType,
    ) -> Result<Option<Value>, LlamaApiError>;

    async fn get_chains(&self) -> Result<Vec<ChainTvlDTO>, LlamaApiError> {
        Ok(serde_json::from_value(self.get_chains_raw().await?)?)
    }

    async fn get_historical_chain_tvl(
        &self,
        chain: &str,
    ) -> Result<Vec<HistoricalTvlPointDTO>, LlamaApiError> {
        Ok(serde_json::from_value(
            self.get_historical_chain_tvl_raw(chain).await?,
        )?)
    }

    async fn get_protocols(&self) -> Result<Vec<ProtocolDTO>, LlamaApiError> {
        Ok(serde_json::from_value(self.get_protocols_raw().await?)?)
    }

    async fn get_fee_summary(
        &self,
        slug: &str,
        data_type: FeeDataType,
    ) -> Result<Option<FeeSummaryDTO>, LlamaApiError> {
        match self.get_fee_summary_raw(slug, data_type).await? {
            Some(raw) => Ok(Some(serde_json::from_value(raw)?)),
            None => Ok(None),
        }
    }
}
