use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::item::ID_ATTRIBUTE;

/// Path parameters extracted from the URL template (`/items/{id}`).
pub type PathParameters = HashMap<String, String>;

/// An inbound request in API-gateway proxy event shape.
///
/// Only the fields the service consumes are modelled; any other event fields
/// are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<PathParameters>,
    #[serde(default)]
    pub body: Option<String>,
}

impl GatewayRequest {
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: Some(http_method.into()),
            path: Some(path.into()),
            path_parameters: None,
            body: None,
        }
    }

    pub fn with_path_id(mut self, id: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(PathParameters::new)
            .insert(ID_ATTRIBUTE.to_string(), id.into());
        self
    }

    pub fn with_path_parameters(mut self, parameters: Option<PathParameters>) -> Self {
        self.path_parameters = parameters;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or_default()
    }

    /// True when the event carries a non-empty path-parameter mapping.
    pub fn has_path_parameters(&self) -> bool {
        self.path_parameters
            .as_ref()
            .is_some_and(|parameters| !parameters.is_empty())
    }

    /// The `id` path parameter, if any.
    pub fn path_id(&self) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|parameters| parameters.get(ID_ATTRIBUTE))
            .map(String::as_str)
    }
}
