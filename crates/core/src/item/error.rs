use thiserror::Error;

/// Errors that can occur when building an [`Item`](super::Item).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item is missing the 'id' attribute")]
    MissingId,
    #[error("Item 'id' must be a string")]
    InvalidId,
    #[error("Item must be a JSON object")]
    NotAnObject,
}
