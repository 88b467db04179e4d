//! In-memory storage backend.
//!
//! Stores items in a `HashMap` wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted; data is lost when the process exits. Used for local
//! development and tests.

mod repository;

pub use repository::InMemoryRepository;
