use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ItemError;

/// Name of the primary key attribute.
pub const ID_ATTRIBUTE: &str = "id";

/// Schema-less attribute map of an item.
///
/// Values are any JSON value: string, number, boolean, null, array or object.
pub type Attributes = serde_json::Map<String, Value>;

/// A single record of the items collection.
///
/// Items are open-ended attribute maps. The only invariant is that the `id`
/// attribute is present and holds a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Attributes", into = "Attributes")]
pub struct Item {
    attributes: Attributes,
}

impl Item {
    /// Builds an item from an attribute map, checking the `id` invariant.
    pub fn from_attributes(attributes: Attributes) -> Result<Self, ItemError> {
        match attributes.get(ID_ATTRIBUTE) {
            Some(Value::String(_)) => Ok(Self { attributes }),
            Some(_) => Err(ItemError::InvalidId),
            None => Err(ItemError::MissingId),
        }
    }

    /// Builds an item from an arbitrary JSON value.
    pub fn from_value(value: Value) -> Result<Self, ItemError> {
        match value {
            Value::Object(attributes) => Self::from_attributes(attributes),
            _ => Err(ItemError::NotAnObject),
        }
    }

    pub fn id(&self) -> &str {
        self.attributes
            .get(ID_ATTRIBUTE)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }

    /// Overwrites the given attributes, leaving `id` untouched.
    pub fn merge(&mut self, changes: &Attributes) {
        for (name, value) in changes {
            if name != ID_ATTRIBUTE {
                self.attributes.insert(name.clone(), value.clone());
            }
        }
    }
}

impl TryFrom<Attributes> for Item {
    type Error = ItemError;

    fn try_from(attributes: Attributes) -> Result<Self, Self::Error> {
        Self::from_attributes(attributes)
    }
}

impl From<Item> for Attributes {
    fn from(item: Item) -> Self {
        item.attributes
    }
}

impl From<Item> for Value {
    fn from(item: Item) -> Self {
        Value::Object(item.attributes)
    }
}
