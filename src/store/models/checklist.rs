//! Preparation checklist models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistCategory {
    Documents,
    Health,
    Packing,
    Booking,
    Preparation,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChecklistItem {
    pub id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: ChecklistCategory,
    pub priority: Priority,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChecklistItemRequest {
    pub user_id: String,
    pub trip_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub category: ChecklistCategory,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub reminder_at: Option<DateTime<Utc>>,
}

/// Partial checklist update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChecklistItemRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<ChecklistCategory>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub reminder_at: Option<DateTime<Utc>>,
}

impl ChecklistItem {
    pub fn new(req: CreateChecklistItemRequest) -> Self {
        Self {
            id: new_id(),
            user_id: req.user_id,
            trip_id: req.trip_id,
            title: req.title,
            description: req.description,
            category: req.category,
            priority: req.priority,
            done: false,
            due_date: req.due_date,
            reminder_at: req.reminder_at,
            created_at: now(),
        }
    }

    pub fn apply(&mut self, req: UpdateChecklistItemRequest) {
        if let Some(title) = req.title {
            self.title = title;
        }
        if let Some(description) = req.description {
            self.description = Some(description);
        }
        if let Some(category) = req.category {
            self.category = category;
        }
        if let Some(priority) = req.priority {
            self.priority = priority;
        }
        if let Some(due_date) = req.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(reminder_at) = req.reminder_at {
            self.reminder_at = Some(reminder_at);
        }
    }
}
