//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request body for creating or updating a post.
///
/// The service accepts any shape: absent fields default to empty strings
/// and unknown fields (including a client-sent id) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}
