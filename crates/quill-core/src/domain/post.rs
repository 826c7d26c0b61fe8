use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a single blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Create a new post with a freshly assigned id.
    ///
    /// Ids are v4 UUIDs, so an id is never reused after its post is
    /// deleted.
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
        }
    }
}

/// Title/content input for creating or updating a post.
///
/// Updates replace both fields in full, so the same type serves create
/// and update. The id is never part of the draft: the store assigns it
/// on create and it is invariant under update.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}
