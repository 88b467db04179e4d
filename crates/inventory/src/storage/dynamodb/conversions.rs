//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB `AttributeValue` maps and
//! schema-less item attributes. Testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use inventory_core::item::{Attributes, Item};
use inventory_core::storage::RepositoryError;

/// Raw DynamoDB item.
pub type DynamoItem = HashMap<String, AttributeValue>;

// ============================================================================
// JSON -> DynamoDB
// ============================================================================

/// Convert a JSON value to a DynamoDB attribute value.
pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(attributes_to_dynamo(map)),
    }
}

/// Convert an attribute map to a DynamoDB attribute map.
pub fn attributes_to_dynamo(attributes: &Attributes) -> DynamoItem {
    attributes
        .iter()
        .map(|(name, value)| (name.clone(), value_to_attribute(value)))
        .collect()
}

/// Convert an Item to a DynamoDB item.
pub fn item_to_dynamo(item: &Item) -> DynamoItem {
    attributes_to_dynamo(item.attributes())
}

// ============================================================================
// DynamoDB -> JSON
// ============================================================================

/// Convert a DynamoDB attribute value to a JSON value.
///
/// String and number sets come back as arrays. Binary values have no JSON
/// form and are rejected.
pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value, RepositoryError> {
    match attribute {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => dynamo_to_attributes(map).map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(RepositoryError::InvalidData(
            "Binary attributes are not supported".to_string(),
        )),
        other => Err(RepositoryError::InvalidData(format!(
            "Unknown attribute type: {:?}",
            other
        ))),
    }
}

/// Convert a DynamoDB attribute map to an attribute map.
pub fn dynamo_to_attributes(item: &DynamoItem) -> Result<Attributes, RepositoryError> {
    item.iter()
        .map(|(name, attribute)| Ok((name.clone(), attribute_to_value(attribute)?)))
        .collect()
}

/// Convert a DynamoDB item to an Item.
pub fn dynamo_to_item(item: &DynamoItem) -> Result<Item, RepositoryError> {
    let attributes = dynamo_to_attributes(item)?;
    Item::from_attributes(attributes).map_err(|e| RepositoryError::InvalidData(e.to_string()))
}

/// Parse a DynamoDB number string, preferring integers.
fn parse_number(raw: &str) -> Result<Value, RepositoryError> {
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(Value::Number(n.into()));
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(Value::Number(n.into()));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| RepositoryError::Serialization(format!("Invalid number: {}", raw)))
}
