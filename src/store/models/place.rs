//! Saved places (bookmarked points of interest, independent of any trip).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPlace {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// e.g. "restaurant", "viewpoint", "hotel"
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSavedPlaceRequest {
    pub user_id: String,
    pub name: String,
    pub country: String,
    pub city: Option<String>,
    pub category: String,
    pub notes: Option<String>,
}

impl SavedPlace {
    pub fn new(req: CreateSavedPlaceRequest) -> Self {
        Self {
            id: new_id(),
            user_id: req.user_id,
            name: req.name,
            country: req.country,
            city: req.city,
            category: req.category,
            notes: req.notes,
            created_at: now(),
        }
    }
}
