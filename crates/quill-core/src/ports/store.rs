use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostDraft};
use crate::error::StoreError;

/// Storage contract for the posts collection.
///
/// Implementations decide where the records live (memory, a JSON file on
/// disk, a real database); the service layer only sees these five
/// operations. Every mutation takes effect immediately - there is no
/// transaction boundary spanning multiple calls.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Return every post, in insertion order.
    async fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Find a post by its id.
    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError>;

    /// Append a new post, assigning it a fresh id.
    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError>;

    /// Replace an existing post's title and content.
    ///
    /// Fails with `StoreError::NotFound` if the id is absent; the id
    /// itself is never changed.
    async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, StoreError>;

    /// Remove a post by its id.
    ///
    /// Fails with `StoreError::NotFound` if the id is absent.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
