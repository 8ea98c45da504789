use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::traits::{CollectionSource, CollectionStore};
use crate::error::StoreError;

/// Collection kept as a pretty-printed JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> JsonFileStore<T> {
    /// `Ok(None)` when the file does not exist yet
    async fn read_records(&self) -> Result<Option<Vec<Value>>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|err| StoreError::Corrupt {
                path: self.path.clone(),
                reason: err.to_string(),
            })
    }
}

#[async_trait]
impl<T> CollectionSource<T> for JsonFileStore<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    /// Records that fail to parse are skipped individually.
    async fn load_all(&self) -> Vec<T> {
        let records = match self.read_records().await {
            Ok(Some(records)) => records,
            Ok(None) => {
                debug!("{} does not exist yet, reading as empty", self.path.display());
                return Vec::new();
            }
            Err(err) => {
                warn!("{}, reading as empty", err);
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(err) => {
                    warn!("Skipping record {} of {}: {}", index, self.path.display(), err);
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl<T> CollectionStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load_for_update(&self) -> Result<Vec<T>, StoreError> {
        let Some(records) = self.read_records().await? else {
            return Ok(Vec::new());
        };

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(record).map_err(|err| StoreError::Corrupt {
                    path: self.path.clone(),
                    reason: format!("record {index}: {err}"),
                })
            })
            .collect()
    }

    async fn save_all(&self, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(items)?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!("Saved {} records to {}", items.len(), self.path.display());
        Ok(())
    }
}
