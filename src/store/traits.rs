use async_trait::async_trait;

use crate::error::StoreError;

/// Read side of a collection.
///
/// Never fails: an absent or unreadable backing resource reads as an
/// empty collection.
#[async_trait]
pub trait CollectionSource<T: Send + Sync + 'static>: Send + Sync {
    async fn load_all(&self) -> Vec<T>;
}

/// A collection that can be overwritten as a whole
#[async_trait]
pub trait CollectionStore<T: Send + Sync + 'static>: CollectionSource<T> {
    /// Strict read ahead of a write-back.
    ///
    /// A missing resource is an empty collection, but one that cannot be
    /// read or holds records that fail to parse is an error, so saving the
    /// result never drops stored records.
    async fn load_for_update(&self) -> Result<Vec<T>, StoreError>;

    async fn save_all(&self, items: &[T]) -> Result<(), StoreError>;
}
