//! Read-only destination catalog, embedded at compile time.

use serde::{Deserialize, Serialize};

use crate::store::BudgetTier;

/// Average daily cost per traveler, by spending tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AverageBudget {
    pub budget: f64,
    pub moderate: f64,
    pub luxury: f64,
}

impl AverageBudget {
    pub fn amount_for(&self, tier: BudgetTier) -> f64 {
        match tier {
            BudgetTier::Budget => self.budget,
            BudgetTier::Moderate => self.moderate,
            BudgetTier::Luxury => self.luxury,
        }
    }
}

/// A catalog destination. Never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub categories: Vec<String>,
    pub average_budget: AverageBudget,
    pub recommended_days: u32,
    pub best_time_to_visit: String,
    pub languages: Vec<String>,
    pub timezone: String,
    pub currency: String,
}

pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    /// Parse the embedded catalog data.
    pub fn load() -> Result<Self, serde_json::Error> {
        let destinations = serde_json::from_str(include_str!("../../data/destinations.json"))?;
        Ok(Self { destinations })
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }
}
