//! HTTP client for the posts API.

use thiserror::Error;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_shared::dto::PostPayload;

/// Errors surfaced by the API client.
///
/// Transport failures and non-success statuses alike; the caller does
/// not distinguish further.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Thin wrapper over `reqwest` speaking the posts API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /posts
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let posts = self
            .http
            .get(self.url("/posts"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(posts)
    }

    /// POST /posts
    pub async fn create_post(&self, payload: &PostPayload) -> Result<Post, ApiError> {
        let post = self
            .http
            .post(self.url("/posts"))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(post)
    }

    /// PUT /posts/{id}
    pub async fn update_post(&self, id: Uuid, payload: &PostPayload) -> Result<Post, ApiError> {
        let post = self
            .http
            .put(self.url(&format!("/posts/{}", id)))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(post)
    }

    /// DELETE /posts/{id}
    ///
    /// The acknowledgement body is ignored.
    pub async fn delete_post(&self, id: Uuid) -> Result<(), ApiError> {
        self.http
            .delete(self.url(&format!("/posts/{}", id)))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
