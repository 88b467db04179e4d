mod error;
mod operations;
mod types;

pub use error::ItemError;
pub use operations::{generate_item_id, partial_update, prepare_new_item};
pub use types::{Attributes, Item, ID_ATTRIBUTE};
