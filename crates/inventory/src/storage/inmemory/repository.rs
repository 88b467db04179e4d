//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use inventory_core::item::{Attributes, Item, ID_ATTRIBUTE};
use inventory_core::storage::{ItemRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Mirrors DynamoDB semantics: puts overwrite, updates upsert, deletes of
/// missing ids succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// DynamoDB refuses empty string key values.
fn check_key(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(RepositoryError::InvalidData(
            "item id must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn scan_items(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn put_item(&self, item: &Item) -> Result<()> {
        check_key(item.id())?;

        let mut items = self.items.write().await;
        items.insert(item.id().to_string(), item.clone());
        Ok(())
    }

    async fn update_item(&self, id: &str, changes: &Attributes) -> Result<Attributes> {
        check_key(id)?;
        if changes.is_empty() {
            return Err(RepositoryError::InvalidData(
                "no attributes to update".to_string(),
            ));
        }

        let mut items = self.items.write().await;
        match items.get_mut(id) {
            Some(item) => item.merge(changes),
            None => {
                let mut attributes = Attributes::new();
                attributes.insert(ID_ATTRIBUTE.to_string(), Value::String(id.to_string()));
                let mut item = Item::from_attributes(attributes)
                    .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
                item.merge(changes);
                items.insert(id.to_string(), item);
            }
        }

        Ok(changes.clone())
    }

    async fn delete_item(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        Item::from_value(value).unwrap()
    }

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let repo = InMemoryRepository::new();
        let widget = item(json!({"id": "w1", "name": "widget"}));

        repo.put_item(&widget).await.unwrap();

        assert_eq!(repo.get_item("w1").await.unwrap(), Some(widget));
        assert_eq!(repo.get_item("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites_existing() {
        let repo = InMemoryRepository::new();
        repo.put_item(&item(json!({"id": "w1", "name": "old", "qty": 1})))
            .await
            .unwrap();

        repo.put_item(&item(json!({"id": "w1", "name": "new"})))
            .await
            .unwrap();

        let stored = repo.get_item("w1").await.unwrap().unwrap();
        assert_eq!(Value::from(stored), json!({"id": "w1", "name": "new"}));
    }

    #[tokio::test]
    async fn test_scan_returns_all_items() {
        let repo = InMemoryRepository::new();
        for id in ["a", "b", "c"] {
            repo.put_item(&item(json!({"id": id}))).await.unwrap();
        }

        let mut ids: Vec<String> = repo
            .scan_items()
            .await
            .unwrap()
            .iter()
            .map(|i| i.id().to_string())
            .collect();
        ids.sort();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_update_merges_attributes() {
        let repo = InMemoryRepository::new();
        repo.put_item(&item(json!({"id": "w1", "name": "widget", "qty": 1})))
            .await
            .unwrap();

        let written = repo
            .update_item("w1", &attrs(json!({"qty": 2})))
            .await
            .unwrap();

        assert_eq!(written, attrs(json!({"qty": 2})));
        let stored = repo.get_item("w1").await.unwrap().unwrap();
        assert_eq!(
            Value::from(stored),
            json!({"id": "w1", "name": "widget", "qty": 2})
        );
    }

    #[tokio::test]
    async fn test_update_missing_item_upserts() {
        let repo = InMemoryRepository::new();

        repo.update_item("new", &attrs(json!({"name": "fresh"})))
            .await
            .unwrap();

        let stored = repo.get_item("new").await.unwrap().unwrap();
        assert_eq!(Value::from(stored), json!({"id": "new", "name": "fresh"}));
    }

    #[tokio::test]
    async fn test_update_with_no_changes_is_rejected() {
        let repo = InMemoryRepository::new();

        let result = repo.update_item("w1", &Attributes::new()).await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert_eq!(repo.get_item("w1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        repo.put_item(&item(json!({"id": "w1"}))).await.unwrap();

        repo.delete_item("w1").await.unwrap();
        repo.delete_item("w1").await.unwrap();

        assert_eq!(repo.get_item("w1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_id_is_rejected() {
        let repo = InMemoryRepository::new();

        let put = repo.put_item(&item(json!({"id": "", "name": "widget"}))).await;
        let update = repo.update_item("", &attrs(json!({"qty": 1}))).await;

        assert!(matches!(put, Err(RepositoryError::InvalidData(_))));
        assert!(matches!(update, Err(RepositoryError::InvalidData(_))));
        assert!(repo.scan_items().await.unwrap().is_empty());
    }
}
