//! DynamoDB storage backend implementation.
//!
//! Items live in a single table keyed by the string attribute `id`, one
//! DynamoDB item per inventory item, with every other attribute stored as-is.

mod conversions;
mod error;
mod expressions;
mod repository;

pub use repository::DynamoDbRepository;
