use serde_json::Value;
use uuid::Uuid;

use super::{Attributes, Item, ItemError, ID_ATTRIBUTE};

/// Generates a fresh random item id (UUID v4).
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Turns a decoded create payload into an item.
///
/// When the payload carries no `id`, one is taken from `generate_id`. A
/// caller-supplied `id` is kept as-is but must be a string.
pub fn prepare_new_item(
    mut attributes: Attributes,
    generate_id: impl FnOnce() -> String,
) -> Result<Item, ItemError> {
    if !attributes.contains_key(ID_ATTRIBUTE) {
        attributes.insert(ID_ATTRIBUTE.to_string(), Value::String(generate_id()));
    }
    Item::from_attributes(attributes)
}

/// Builds the partial-update attribute set from an update payload.
///
/// Every attribute is kept except `id`, which is immutable and silently
/// dropped.
pub fn partial_update(payload: Attributes) -> Attributes {
    payload
        .into_iter()
        .filter(|(name, _)| name != ID_ATTRIBUTE)
        .collect()
}
