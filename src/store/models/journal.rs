//! Travel journal entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub entry_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJournalEntryRequest {
    pub user_id: String,
    pub trip_id: Option<String>,
    pub title: String,
    pub body: String,
    pub location: Option<String>,
    pub entry_date: NaiveDate,
}

impl JournalEntry {
    pub fn new(req: CreateJournalEntryRequest) -> Self {
        Self {
            id: new_id(),
            user_id: req.user_id,
            trip_id: req.trip_id,
            title: req.title,
            body: req.body,
            location: req.location,
            entry_date: req.entry_date,
            created_at: now(),
        }
    }
}
