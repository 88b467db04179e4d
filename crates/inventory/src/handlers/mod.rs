pub mod dispatch;
pub mod gateway;
pub mod health;
pub mod items;

pub use dispatch::dispatch;
