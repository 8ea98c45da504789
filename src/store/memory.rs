use async_trait::async_trait;
use std::sync::Mutex;

use super::traits::{CollectionSource, CollectionStore};
use crate::error::StoreError;

/// Collection held in memory
#[derive(Debug, Default)]
pub struct InMemoryStore<T> {
    items: Mutex<Vec<T>>,
}

impl<T: Clone> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Snapshot of the current contents
    pub fn items(&self) -> Vec<T> {
        self.items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl<T> CollectionSource<T> for InMemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load_all(&self) -> Vec<T> {
        self.items()
    }
}

#[async_trait]
impl<T> CollectionStore<T> for InMemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load_for_update(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.items())
    }

    async fn save_all(&self, items: &[T]) -> Result<(), StoreError> {
        *self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = items.to_vec();
        Ok(())
    }
}
