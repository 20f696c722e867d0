use llama_client::LlamaApiError;

#[derive(Debug, thiserror::Error)]
pub enum KpiError {
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error(transparent)]
    Api(#[from] LlamaApiError),
}
