//! Travel media (photos and videos).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub kind: MediaKind,
    /// Local or remote location of the asset
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaRequest {
    pub user_id: String,
    pub trip_id: Option<String>,
    pub kind: MediaKind,
    pub uri: String,
    pub caption: Option<String>,
}

impl MediaItem {
    pub fn new(req: CreateMediaRequest) -> Self {
        Self {
            id: new_id(),
            user_id: req.user_id,
            trip_id: req.trip_id,
            kind: req.kind,
            uri: req.uri,
            caption: req.caption,
            created_at: now(),
        }
    }
}
