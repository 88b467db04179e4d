//! Item CRUD handlers.
//!
//! Each handler validates its input, performs exactly one repository call and
//! builds the response envelope. Failures are returned as [`ApiError`] and
//! turned into envelopes by the dispatch boundary.

use serde_json::{json, Value};

use inventory_core::api::{build_response, ApiError, Envelope, PathParameters};
use inventory_core::item::{
    generate_item_id, partial_update, prepare_new_item, Attributes, ItemError, ID_ATTRIBUTE,
};
use inventory_core::storage::ItemRepository;

/// Returns the `id` path parameter or [`ApiError::MissingIdentifier`].
fn require_path_id(path_parameters: Option<&PathParameters>) -> Result<&str, ApiError> {
    path_parameters
        .and_then(|parameters| parameters.get(ID_ATTRIBUTE))
        .map(String::as_str)
        .ok_or(ApiError::MissingIdentifier)
}

/// Decodes a raw body into a JSON object.
fn decode_object(body: Option<&str>) -> Result<Attributes, ApiError> {
    let raw = body.ok_or_else(|| ApiError::InvalidBody("missing body".to_string()))?;

    match serde_json::from_str::<Value>(raw)? {
        Value::Object(attributes) => Ok(attributes),
        _ => Err(ItemError::NotAnObject.into()),
    }
}

// ============================================================================
// Create Item
// ============================================================================

/// Create a new item (POST).
pub async fn create_item(
    repo: &dyn ItemRepository,
    body: Option<&str>,
) -> Result<Envelope, ApiError> {
    let payload = decode_object(body)?;
    let item = prepare_new_item(payload, generate_item_id)?;

    repo.put_item(&item)
        .await
        .map_err(ApiError::CreateFailed)?;

    tracing::info!(item_id = %item.id(), "Created item");

    Ok(build_response(
        201,
        Some(&json!({ "message": "Item created", "id": item.id() })),
    ))
}

// ============================================================================
// Get Item
// ============================================================================

/// Get a single item by id (GET with path id).
pub async fn get_item(
    repo: &dyn ItemRepository,
    path_parameters: Option<&PathParameters>,
) -> Result<Envelope, ApiError> {
    let id = require_path_id(path_parameters)?;

    let item = repo
        .get_item(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;

    Ok(build_response(200, Some(&Value::from(item))))
}

// ============================================================================
// List Items
// ============================================================================

/// List every item in the collection (GET on the collection path).
pub async fn list_items(repo: &dyn ItemRepository) -> Result<Envelope, ApiError> {
    let items = repo.scan_items().await?;

    tracing::debug!(count = items.len(), "Scanned items");

    let body = Value::Array(items.into_iter().map(Value::from).collect());
    Ok(build_response(200, Some(&body)))
}

// ============================================================================
// Update Item
// ============================================================================

/// Apply a partial update to an item (PUT / PATCH).
///
/// An `id` attribute in the body is ignored. Updating an id that does not
/// exist creates it.
pub async fn update_item(
    repo: &dyn ItemRepository,
    path_parameters: Option<&PathParameters>,
    body: Option<&str>,
) -> Result<Envelope, ApiError> {
    let id = require_path_id(path_parameters)?;
    let changes = partial_update(decode_object(body)?);

    let written = repo
        .update_item(id, &changes)
        .await
        .map_err(ApiError::UpdateFailed)?;

    tracing::info!(item_id = %id, attributes = written.len(), "Updated item");

    Ok(build_response(
        200,
        Some(&json!({ "message": format!("Item {} updated", id) })),
    ))
}

// ============================================================================
// Delete Item
// ============================================================================

/// Delete an item by id (DELETE). Succeeds whether or not the item existed.
pub async fn delete_item(
    repo: &dyn ItemRepository,
    path_parameters: Option<&PathParameters>,
) -> Result<Envelope, ApiError> {
    let id = require_path_id(path_parameters)?;

    repo.delete_item(id).await?;

    tracing::info!(item_id = %id, "Deleted item");

    Ok(build_response(204, None))
}
