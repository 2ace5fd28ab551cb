//! Trip, budget, and location models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{new_id, now};
use super::expense::ExpenseCategory;

/// Trip lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Planning,
    Upcoming,
    Ongoing,
    Completed,
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planning => write!(f, "planning"),
            Self::Upcoming => write!(f, "upcoming"),
            Self::Ongoing => write!(f, "ongoing"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planning" => Ok(Self::Planning),
            "upcoming" => Ok(Self::Upcoming),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Unknown trip status: {}", s)),
        }
    }
}

/// Per-category spend accumulated from recorded expenses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetBuckets {
    #[serde(default)]
    pub transport: f64,
    #[serde(default)]
    pub accommodation: f64,
    #[serde(default)]
    pub food: f64,
    #[serde(default)]
    pub activities: f64,
    #[serde(default)]
    pub other: f64,
}

impl BudgetBuckets {
    pub fn add(&mut self, category: ExpenseCategory, amount: f64) {
        match category {
            ExpenseCategory::Transport => self.transport += amount,
            ExpenseCategory::Accommodation => self.accommodation += amount,
            ExpenseCategory::Food => self.food += amount,
            ExpenseCategory::Activities => self.activities += amount,
            ExpenseCategory::Other => self.other += amount,
        }
    }
}

/// A trip's money envelope. `spent` always equals the sum of the amounts
/// of the expenses recorded against the trip; the store maintains this,
/// not the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub total: f64,
    #[serde(default)]
    pub spent: f64,
    pub currency: String,
    #[serde(default)]
    pub breakdown: BudgetBuckets,
}

impl Budget {
    pub fn new(total: f64, currency: String) -> Self {
        Self {
            total,
            spent: 0.0,
            currency,
            breakdown: BudgetBuckets::default(),
        }
    }

    pub fn remaining(&self) -> f64 {
        self.total - self.spent
    }
}

/// A point of interest attached to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Semantic kind, e.g. "restaurant", "museum", "beach"
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub kind: String,
}

impl Location {
    pub fn new(req: CreateLocationRequest) -> Self {
        Self {
            id: new_id(),
            name: req.name,
            latitude: req.latitude,
            longitude: req.longitude,
            address: req.address,
            country: req.country,
            city: req.city,
            kind: req.kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub destination: String,
    pub country: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: TripStatus,
    #[serde(default)]
    pub public: bool,
    pub travelers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub budget: Budget,
    #[serde(default)]
    pub locations: Vec<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripRequest {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub destination: String,
    pub country: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub travelers: u32,
    pub budget_total: f64,
    pub currency: String,
    #[serde(default)]
    pub public: bool,
}

/// Partial trip update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTripRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TripStatus>,
    pub public: Option<bool>,
    pub travelers: Option<u32>,
    pub notes: Option<String>,
    pub budget_total: Option<f64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl Trip {
    pub fn new(req: CreateTripRequest) -> Self {
        let created = now();
        Self {
            id: new_id(),
            user_id: req.user_id,
            title: req.title,
            description: req.description,
            destination: req.destination,
            country: req.country,
            start_date: req.start_date,
            end_date: req.end_date,
            status: TripStatus::Planning,
            public: req.public,
            travelers: req.travelers,
            notes: None,
            budget: Budget::new(req.budget_total, req.currency),
            locations: Vec::new(),
            created_at: created,
            updated_at: created,
        }
    }

    /// Apply a partial update and refresh `updated_at`.
    pub fn apply(&mut self, req: UpdateTripRequest) {
        if let Some(title) = req.title {
            self.title = title;
        }
        if let Some(description) = req.description {
            self.description = Some(description);
        }
        if let Some(status) = req.status {
            self.status = status;
        }
        if let Some(public) = req.public {
            self.public = public;
        }
        if let Some(travelers) = req.travelers {
            self.travelers = travelers;
        }
        if let Some(notes) = req.notes {
            self.notes = Some(notes);
        }
        if let Some(total) = req.budget_total {
            self.budget.total = total;
        }
        if let Some(start) = req.start_date {
            self.start_date = start;
        }
        if let Some(end) = req.end_date {
            self.end_date = end;
        }
        self.updated_at = now();
    }
}
