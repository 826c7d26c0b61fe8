//! Storage-level error types.

use thiserror::Error;

/// Errors surfaced by `PostStore` implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post not found")]
    NotFound,

    #[error("failed to load post store: {0}")]
    Load(String),

    #[error("failed to persist post store: {0}")]
    Persist(String),
}
