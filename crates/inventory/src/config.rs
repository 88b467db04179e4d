use std::env;

use inventory_core::api::DEFAULT_COLLECTION_PATH;

/// Default DynamoDB table holding the items collection.
pub const DEFAULT_TABLE_NAME: &str = "InventoryTable";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage table name (default: "InventoryTable")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub table_name: String,
    /// Literal path of the items collection (default: "/items")
    pub collection_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INVENTORY_TABLE_NAME` - Storage table name (default: "InventoryTable")
    /// - `ITEMS_COLLECTION_PATH` - Collection path (default: "/items")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("INVENTORY_TABLE_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            collection_path: env::var("ITEMS_COLLECTION_PATH")
                .ok()
                .map(|v| normalize_collection_path(&v))
                .filter(|v| v != "/")
                .unwrap_or_else(|| DEFAULT_COLLECTION_PATH.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
        }
    }
}

/// Ensures a single leading slash and no trailing slash.
fn normalize_collection_path(raw: &str) -> String {
    format!("/{}", raw.trim().trim_matches('/'))
}
