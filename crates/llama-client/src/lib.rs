pub mod cache;
pub mod client;
pub mod dto;
pub mod error;
pub mod slug;
pub mod traits;

pub use cache::JsonCache;
pub use client::{DEFAULT_API_ENDPOINT, LlamaClient};
pub use error::LlamaApiError;
pub use traits::LlamaApi;

pub use dto::*;
