//! File-backed post store - a single JSON document as source of truth.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, PostDraft};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// On-disk document layout: the collection keyed by its name.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    posts: Vec<Post>,
}

/// Post store backed by a single JSON file.
///
/// The document is read once at open; every create/update/delete rewrites
/// the whole file before returning. No write-ahead log, no atomic rename -
/// each mutation persists immediately and independently.
pub struct JsonFilePostStore {
    path: PathBuf,
    posts: RwLock<Vec<Post>>,
}

impl JsonFilePostStore {
    /// Open a store at `path`.
    ///
    /// A missing file yields an empty collection; the file is created by
    /// the first mutation. An unreadable or unparsable file is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let posts = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let doc: StoreDocument = serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::Load(e.to_string()))?;
                doc.posts
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Load(e.to_string())),
        };

        tracing::debug!(
            path = %path.display(),
            count = posts.len(),
            "loaded post store"
        );

        Ok(Self {
            path,
            posts: RwLock::new(posts),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, posts: &[Post]) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(&serde_json::json!({ "posts": posts }))
            .map_err(|e| StoreError::Persist(e.to_string()))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| StoreError::Persist(e.to_string()))
    }
}

#[async_trait]
impl PostStore for JsonFilePostStore {
    async fn list(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let post = Post::new(draft.title, draft.content);
        posts.push(post.clone());
        self.persist(&posts).await?;
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
        let updated = post.clone();
        self.persist(&posts).await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(StoreError::NotFound);
        }
        self.persist(&posts).await
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
    async fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePostStore::open(dir.path().join("db.json"))
            .await
            .unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unparsable_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(&path, "not json").unwrap();

        let result = JsonFilePostStore::open(&path).await;
        assert!(matches!(result, Err(StoreError::Load(_))));
    }

    #[tokio::test]
    async fn mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = JsonFilePostStore::open(&path).await.unwrap();
        let first = store.create(draft("first", "1")).await.unwrap();
        let second = store.create(draft("second", "2")).await.unwrap();
        store
            .update(second.id, draft("second, edited", "2b"))
            .await
            .unwrap();
        drop(store);

        let reopened = JsonFilePostStore::open(&path).await.unwrap();
        let posts = reopened.list().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, first.id);
        assert_eq!(posts[0].title, "first");
        assert_eq!(posts[1].id, second.id);
        assert_eq!(posts[1].title, "second, edited");
        assert_eq!(posts[1].content, "2b");
    }

    #[tokio::test]
    async fn delete_rewrites_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = JsonFilePostStore::open(&path).await.unwrap();
        let doomed = store.create(draft("doomed", "x")).await.unwrap();
        let kept = store.create(draft("kept", "y")).await.unwrap();
        store.delete(doomed.id).await.unwrap();
        drop(store);

        let reopened = JsonFilePostStore::open(&path).await.unwrap();
        let posts = reopened.list().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, kept.id);
        assert!(reopened.get(doomed.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn document_uses_the_collection_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");

        let store = JsonFilePostStore::open(&path).await.unwrap();
        store.create(draft("A", "B")).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert!(raw["posts"].is_array());
        assert_eq!(raw["posts"][0]["title"], "A");
    }
}
