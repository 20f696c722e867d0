use std::time::Duration;

use llama_types::FeeDataType;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::{error::LlamaApiError, traits::LlamaApi};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.llama.fi";

pub struct LlamaClient {
    http_client: Client,
    api_endpoint: Url,
}

impl LlamaClient {
    pub fn new(api_endpoint: &str, timeout: Duration) -> Result<Self, LlamaApiError> {
        let api_endpoint = Url::parse(api_endpoint)
            .map_err(|e| LlamaApiError::UrlError(format!("{api_endpoint}: {e}")))?;
        if api_endpoint.cannot_be_a_base() {
            return Err(LlamaApiError::UrlError(format!(
                "{api_endpoint}: cannot be used as a base url"
            )));
        }

        Ok(Self {
            http_client: http_client(timeout)?,
            api_endpoint,
        })
    }

    /// Appends percent-encoded path segments to the API endpoint.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, LlamaApiError> {
        let mut url = self.api_endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| LlamaApiError::UrlError(self.api_endpoint.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value, LlamaApiError> {
        tracing::debug!(%url, "GET");
        let response = self.http_client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlamaApiError::StatusError {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait::async_trait]
impl LlamaApi for LlamaClient {
    async fn get_chains_raw(&self) -> Result<Value, LlamaApiError> {
        let url = self.endpoint(&["v2", "chains"])?;
        self.get_json(url).await
    }

    async fn get_historical_chain_tvl_raw(&self, chain: &str) -> Result<Value, LlamaApiError> {
        let url = self.endpoint(&["v2", "historicalChainTvl", chain])?;
        self.get_json(url).await
    }

    async fn get_protocols_raw(&self) -> Result<Value, LlamaApiError> {
        let url = self.endpoint(&["protocols"])?;
        self.get_json(url).await
    }

    async fn get_fee_summary_raw(
        &self,
        slug: &str,
        data_type: FeeDataType,
    ) -> Result<Option<Value>, LlamaApiError> {
        let mut url = self.endpoint(&["summary", "fees", slug])?;
        url.query_pairs_mut()
            .append_pair("dataType", data_type.as_ref());

        match self.get_json(url).await {
            Ok(body) => Ok(Some(body)),
            Err(LlamaApiError::StatusError { status, url }) if status == StatusCode::NOT_FOUND => {
                tracing::debug!(%url, "No fee summary");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

pub fn http_client(timeout: Duration) -> Result<Client, LlamaApiError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("llama-analytics/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            LlamaApiError::HttpError(e)
        })
}
