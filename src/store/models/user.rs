//! User profile and email verification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now, BudgetTier};

/// The single workspace user. Created at signup, mutated by profile edits,
/// cleared on logout or account deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub verified: bool,
    /// Pending, time-limited email verification code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationCode>,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_city: Option<String>,
    #[serde(default)]
    pub budget_tier: BudgetTier,
    #[serde(default)]
    pub travel_styles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub nationality: String,
    pub departure_city: Option<String>,
}

impl User {
    pub fn new(req: SignupRequest) -> Self {
        let created = now();
        Self {
            id: new_id(),
            name: req.name,
            email: req.email,
            verified: false,
            verification: None,
            nationality: req.nationality,
            departure_city: req.departure_city,
            budget_tier: BudgetTier::default(),
            travel_styles: Vec::new(),
            created_at: created,
            updated_at: created,
        }
    }
}
