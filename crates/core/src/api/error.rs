use thiserror::Error;

use crate::item::ItemError;
use crate::storage::RepositoryError;

use super::{api_error_to_status_code, Envelope};

/// Every way a request can fail.
///
/// Each variant carries a fixed public message; internal details stay in the
/// `Display` output for logging only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Missing item ID")]
    MissingIdentifier,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Method or path not supported")]
    UnsupportedRoute,
    #[error("Failed to create item: {0}")]
    CreateFailed(#[source] RepositoryError),
    #[error("Failed to update item: {0}")]
    UpdateFailed(#[source] RepositoryError),
    #[error("Storage backend failure: {0}")]
    Backend(#[from] RepositoryError),
    #[error("Unhandled fault: {0}")]
    Unhandled(String),
}

impl ApiError {
    /// Message returned to the caller in the envelope body.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingIdentifier => "Missing item ID",
            ApiError::InvalidBody(_) => "Invalid request body",
            ApiError::NotFound(_) => "Item not found",
            ApiError::UnsupportedRoute => "Method or path not supported",
            ApiError::CreateFailed(_) => "Failed to create item",
            ApiError::UpdateFailed(_) => "Failed to update item",
            ApiError::Backend(_) | ApiError::Unhandled(_) => "Internal Server Error",
        }
    }

    pub fn status_code(&self) -> u16 {
        api_error_to_status_code(self)
    }

    pub fn to_envelope(&self) -> Envelope {
        Envelope::message(self.status_code(), self.public_message())
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        ApiError::InvalidBody(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody(err.to_string())
    }
}
