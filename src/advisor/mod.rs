//! Trip preparation advisor.
//!
//! Pure, synchronous derivation of a budget breakdown, a visa requirement,
//! and health guidance from a catalog destination and a travel request. No
//! I/O: the only failure class is input validation, reported before any
//! derivation runs.

mod budget;
mod catalog;
mod health;
mod visa;

pub use budget::{calculate_budget, BudgetBreakdown, BudgetSplit, BUDGET_SPLIT, DEFAULT_TRIP_DAYS};
pub use catalog::{AverageBudget, Destination, DestinationCatalog};
pub use health::{health_info, HealthInfo, Vaccination};
pub use visa::{visa_requirement, VisaRequirement};

use chrono::NaiveDate;
use thiserror::Error;

use crate::store::{
    BudgetTier, ChecklistCategory, CreateChecklistItemRequest, Priority,
};

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("destination {0:?} is not in the catalog")]
    UnknownDestination(String),

    #[error("end date {end} precedes start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("at least one traveler is required")]
    NoTravelers,
}

/// What the traveler is asking about: where, when, how many, at which
/// spending tier, and with which passport.
#[derive(Debug, Clone)]
pub struct TravelRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub travelers: u32,
    pub budget_level: BudgetTier,
    pub departure_city: Option<String>,
    pub nationality: String,
}

/// The advisor's combined output. Recomputed on every request; never
/// persisted.
#[derive(Debug, Clone)]
pub struct TripAdvisory {
    pub destination: Destination,
    pub budget: BudgetBreakdown,
    pub visa: VisaRequirement,
    pub health: HealthInfo,
}

/// Derive the full advisory for a catalog destination.
pub fn prepare_trip(
    catalog: &DestinationCatalog,
    destination_id: &str,
    request: &TravelRequest,
) -> Result<TripAdvisory, AdvisorError> {
    let destination = catalog
        .find_by_id(destination_id)
        .ok_or_else(|| AdvisorError::UnknownDestination(destination_id.to_string()))?;

    let budget = budget::calculate_budget(destination, request)?;
    let visa = visa::visa_requirement(&destination.country, &request.nationality);
    let health = health::health_info(&destination.country);

    Ok(TripAdvisory {
        destination: destination.clone(),
        budget,
        visa,
        health,
    })
}

/// Turn an advisory into preparation tasks: one document item per required
/// visa paper, one health item per mandatory vaccination. The caller feeds
/// these to the store's bulk checklist insert.
pub fn advisory_checklist(
    user_id: &str,
    trip_id: Option<&str>,
    advisory: &TripAdvisory,
) -> Vec<CreateChecklistItemRequest> {
    let mut items = Vec::new();

    if advisory.visa.required {
        for document in &advisory.visa.documents {
            items.push(CreateChecklistItemRequest {
                user_id: user_id.to_string(),
                trip_id: trip_id.map(str::to_string),
                title: document.clone(),
                description: Some(format!(
                    "{} (traitement {})",
                    advisory.visa.visa_type, advisory.visa.processing_time
                )),
                category: ChecklistCategory::Documents,
                priority: Priority::High,
                due_date: None,
                reminder_at: None,
            });
        }
    }

    for vaccination in &advisory.health.vaccinations {
        if vaccination.required {
            items.push(CreateChecklistItemRequest {
                user_id: user_id.to_string(),
                trip_id: trip_id.map(str::to_string),
                title: format!("Vaccin {}", vaccination.name),
                description: Some(format!(
                    "Obligatoire pour {}",
                    advisory.destination.country
                )),
                category: ChecklistCategory::Health,
                priority: Priority::High,
                due_date: None,
                reminder_at: None,
            });
        }
    }

    items
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn destination(country: &str, moderate_daily: f64) -> Destination {
        Destination {
            id: "test".to_string(),
            name: "Test".to_string(),
            country: country.to_string(),
            continent: "Europe".to_string(),
            categories: vec!["ville".to_string()],
            average_budget: AverageBudget {
                budget: moderate_daily / 2.0,
                moderate: moderate_daily,
                luxury: moderate_daily * 2.5,
            },
            recommended_days: 7,
            best_time_to_visit: "Toute l'année".to_string(),
            languages: vec!["anglais".to_string()],
            timezone: "UTC".to_string(),
            currency: "EUR".to_string(),
        }
    }

    pub(crate) fn request(nationality: &str) -> TravelRequest {
        TravelRequest {
            start_date: None,
            end_date: None,
            travelers: 1,
            budget_level: BudgetTier::Moderate,
            departure_city: None,
            nationality: nationality.to_string(),
        }
    }

    #[test]
    fn prepare_trip_composes_all_three_advisories() {
        let catalog = DestinationCatalog::load().unwrap();
        let advisory = prepare_trip(&catalog, "bali", &request("France")).unwrap();

        assert_eq!(advisory.destination.country, "Indonésie");
        assert!(advisory.budget.total > 0.0);
        assert!(!advisory.visa.required);
        assert!(advisory.health.vaccinations.len() >= 3);
        assert!(advisory.health.medical_insurance);
    }

    #[test]
    fn unknown_destination_is_rejected_before_derivation() {
        let catalog = DestinationCatalog::load().unwrap();
        let err = prepare_trip(&catalog, "atlantide", &request("France")).unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownDestination(_)));
    }

    #[test]
    fn esta_and_required_vaccinations_become_checklist_items() {
        let catalog = DestinationCatalog::load().unwrap();

        let us = prepare_trip(&catalog, "new-york", &request("France")).unwrap();
        let items = advisory_checklist("u1", Some("t1"), &us);
        assert_eq!(items.len(), us.visa.documents.len());
        assert!(items
            .iter()
            .all(|i| i.category == ChecklistCategory::Documents));

        let bali = prepare_trip(&catalog, "bali", &request("France")).unwrap();
        let items = advisory_checklist("u1", None, &bali);
        assert!(items
            .iter()
            .any(|i| i.category == ChecklistCategory::Health
                && i.title.contains("Fièvre jaune")));
    }

    #[test]
    fn visa_free_trip_with_no_required_shots_yields_no_tasks() {
        let catalog = DestinationCatalog::load().unwrap();
        let berlin = prepare_trip(&catalog, "berlin", &request("France")).unwrap();
        assert!(advisory_checklist("u1", None, &berlin).is_empty());
    }
}
