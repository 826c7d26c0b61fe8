//! In-memory post store - used by tests and as fallback when the data
//! file cannot be loaded.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, PostDraft};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// In-memory store holding posts in insertion order.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let post = Post::new(draft.title, draft.content);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        post.title = draft.title;
        post.content = draft.content;
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = InMemoryPostStore::new();
        let created = store.create(draft("A", "B")).await.unwrap();

        let fetched = store.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "A");
        assert_eq!(fetched.content, "B");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn created_ids_are_unique_across_history() {
        let store = InMemoryPostStore::new();
        let first = store.create(draft("a", "1")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(draft("a", "1")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryPostStore::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            let post = store
                .create(draft(&format!("post {i}"), &format!("body {i}")))
                .await
                .unwrap();
            ids.push(post.id);
        }

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 5);
        assert_eq!(listed.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
        assert_eq!(listed[3].title, "post 3");
    }

    #[tokio::test]
    async fn update_replaces_fields_but_not_id() {
        let store = InMemoryPostStore::new();
        let created = store.create(draft("old", "old body")).await.unwrap();

        let updated = store
            .update(created.id, draft("new", "new body"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "new");
        assert_eq!(updated.content, "new body");
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let store = InMemoryPostStore::new();
        let created = store.create(draft("x", "y")).await.unwrap();

        let once = store.update(created.id, draft("t", "c")).await.unwrap();
        let twice = store.update(created.id, draft("t", "c")).await.unwrap();
        assert_eq!(once, twice);
        assert_eq!(store.get(created.id).await.unwrap().unwrap(), twice);
    }

    #[tokio::test]
    async fn update_missing_id_fails_and_leaves_store_unchanged() {
        let store = InMemoryPostStore::new();
        let created = store.create(draft("keep", "me")).await.unwrap();

        let result = store.update(Uuid::new_v4(), draft("X", "Y")).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
        assert_eq!(store.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn delete_then_get_is_none() {
        let store = InMemoryPostStore::new();
        let created = store.create(draft("gone", "soon")).await.unwrap();

        store.delete(created.id).await.unwrap();
        assert!(store.get(created.id).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_id_fails() {
        let store = InMemoryPostStore::new();
        let result = store.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }
}
