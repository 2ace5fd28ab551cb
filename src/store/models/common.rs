//! Shared model types and helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generate a fresh entity id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Timestamp used for created/updated fields.
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Spending tier used for traveler preferences and per-destination daily
/// budgets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    #[default]
    Moderate,
    Luxury,
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "budget"),
            Self::Moderate => write!(f, "moderate"),
            Self::Luxury => write!(f, "luxury"),
        }
    }
}

impl std::str::FromStr for BudgetTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "moderate" => Ok(Self::Moderate),
            "luxury" => Ok(Self::Luxury),
            _ => Err(format!("Unknown budget tier: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_tier_parses_case_insensitively() {
        assert_eq!("Luxury".parse::<BudgetTier>().unwrap(), BudgetTier::Luxury);
        assert!("platinum".parse::<BudgetTier>().is_err());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
