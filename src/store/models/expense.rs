//! Expense models. Expenses are append-only: once recorded they are never
//! edited, which keeps the trip budget ledger auditable.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};

/// Spending category, shared by expenses and trip budget buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Transport,
    Accommodation,
    Food,
    Activities,
    Other,
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport => write!(f, "transport"),
            Self::Accommodation => write!(f, "accommodation"),
            Self::Food => write!(f, "food"),
            Self::Activities => write!(f, "activities"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transport" => Ok(Self::Transport),
            "accommodation" => Ok(Self::Accommodation),
            "food" => Ok(Self::Food),
            "activities" => Ok(Self::Activities),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown expense category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub trip_id: String,
    pub user_id: String,
    pub title: String,
    pub amount: f64,
    pub currency: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Reference to a stored receipt image, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpenseRequest {
    pub trip_id: String,
    pub user_id: String,
    pub title: String,
    pub amount: f64,
    pub currency: String,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub receipt: Option<String>,
}

impl Expense {
    pub fn new(req: CreateExpenseRequest) -> Self {
        Self {
            id: new_id(),
            trip_id: req.trip_id,
            user_id: req.user_id,
            title: req.title,
            amount: req.amount,
            currency: req.currency,
            category: req.category,
            date: req.date,
            notes: req.notes,
            receipt: req.receipt,
            created_at: now(),
        }
    }
}
