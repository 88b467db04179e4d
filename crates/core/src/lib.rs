//! Functional core for the inventory items service.
//!
//! Everything in this crate is pure: item modelling, the gateway request and
//! response envelope, routing rules and the repository contract. The binary
//! crate supplies the storage backends and the HTTP shell.

pub mod api;
pub mod item;
pub mod storage;
