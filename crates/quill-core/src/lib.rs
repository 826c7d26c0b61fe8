//! # Quill Core
//!
//! The domain layer of the Quill blog demo.
//! This crate contains the post entity and the storage port, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::StoreError;
