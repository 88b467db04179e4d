use async_trait::async_trait;

use crate::item::{Attributes, Item};

use super::Result;

/// Storage contract for the items collection.
///
/// Each method maps to exactly one backend call keyed by the `id` attribute.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its id.
    async fn get_item(&self, id: &str) -> Result<Option<Item>>;

    /// Returns every item in the table, in no particular order.
    async fn scan_items(&self) -> Result<Vec<Item>>;

    /// Writes the full item, replacing any previous record with the same id.
    async fn put_item(&self, item: &Item) -> Result<()>;

    /// Overwrites the given attributes on the item, creating it when absent.
    ///
    /// Returns the attributes as written. An empty change set is rejected with
    /// [`RepositoryError::InvalidData`](super::RepositoryError::InvalidData).
    async fn update_item(&self, id: &str, changes: &Attributes) -> Result<Attributes>;

    /// Deletes an item by its id. Deleting a missing id is not an error.
    async fn delete_item(&self, id: &str) -> Result<()>;
}
