//! Travel playlists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackRef {
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistRequest {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tracks: Vec<TrackRef>,
}

impl Playlist {
    pub fn new(req: CreatePlaylistRequest) -> Self {
        Self {
            id: new_id(),
            user_id: req.user_id,
            name: req.name,
            description: req.description,
            tracks: req.tracks,
            created_at: now(),
        }
    }
}
