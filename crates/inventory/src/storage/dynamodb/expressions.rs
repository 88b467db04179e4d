//! Update expression construction.
//!
//! Attribute names and values always go through `#aN` / `:vN` placeholders,
//! so reserved words (`name`, `status`, ...) and names with spaces or dots
//! are written literally.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use inventory_core::item::{Attributes, ID_ATTRIBUTE};

use super::conversions::value_to_attribute;

/// The pieces of an UpdateItem request.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Build a `SET` expression for the given changes.
///
/// The key attribute is skipped. Returns `None` when nothing is left to set.
pub fn build_update_expression(changes: &Attributes) -> Option<UpdateExpression> {
    let mut clauses = Vec::with_capacity(changes.len());
    let mut names = HashMap::with_capacity(changes.len());
    let mut values = HashMap::with_capacity(changes.len());

    for (index, (name, value)) in changes
        .iter()
        .filter(|(name, _)| name.as_str() != ID_ATTRIBUTE)
        .enumerate()
    {
        let name_placeholder = format!("#a{}", index);
        let value_placeholder = format!(":v{}", index);

        clauses.push(format!("{} = {}", name_placeholder, value_placeholder));
        names.insert(name_placeholder, name.clone());
        values.insert(value_placeholder, value_to_attribute(value));
    }

    if clauses.is_empty() {
        return None;
    }

    Some(UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    })
}
