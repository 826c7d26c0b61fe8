//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the post store adapters: the file-backed JSON
//! document store and the in-memory fallback.

pub mod store;

pub use store::{InMemoryPostStore, JsonFilePostStore};
