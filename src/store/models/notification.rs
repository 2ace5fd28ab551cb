//! In-app notification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TripReminder,
    ChecklistDue,
    Social,
    System,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TripReminder => write!(f, "trip_reminder"),
            Self::ChecklistDue => write!(f, "checklist_due"),
            Self::Social => write!(f, "social"),
            Self::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trip_reminder" => Ok(Self::TripReminder),
            "checklist_due" => Ok(Self::ChecklistDue),
            "social" => Ok(Self::Social),
            "system" => Ok(Self::System),
            _ => Err(format!("Unknown notification kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(req: CreateNotificationRequest) -> Self {
        Self {
            id: new_id(),
            user_id: req.user_id,
            kind: req.kind,
            title: req.title,
            body: req.body,
            read: false,
            created_at: now(),
        }
    }
}
