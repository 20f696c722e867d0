use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};

use crate::error::LlamaApiError;

/// Directory of `{name}.json` files holding raw API responses.
#[derive(Debug, Clone)]
pub struct JsonCache {
    dir: PathBuf,
}

impl JsonCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(name)))
    }

    pub async fn contains(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.path_for(name))
            .await
            .unwrap_or(false)
    }

    pub async fn store<T>(&self, name: &str, value: &T) -> Result<PathBuf, LlamaApiError>
    where
        T: Serialize + Sync + ?Sized,
    {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| LlamaApiError::CacheError {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.path_for(name);
        let bytes = serde_json::to_vec(value)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| LlamaApiError::CacheError {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Cached API response");
        Ok(path)
    }

    pub async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, LlamaApiError> {
        let path = self.path_for(name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| LlamaApiError::CacheError {
                path: path.clone(),
                source,
            })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Keeps names readable (`"Curve DEX"` stays as is) while refusing path separators.
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
