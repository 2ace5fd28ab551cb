//! Social feed posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostVisibility {
    #[default]
    Public,
    Friends,
    Private,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub body: String,
    /// Ids of attached media items
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub visibility: PostVisibility,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: String,
    pub body: String,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub visibility: PostVisibility,
}

impl Post {
    pub fn new(req: CreatePostRequest) -> Self {
        Self {
            id: new_id(),
            user_id: req.user_id,
            body: req.body,
            media: req.media,
            likes: 0,
            visibility: req.visibility,
            created_at: now(),
        }
    }
}
