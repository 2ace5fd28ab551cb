//! Budget estimation: daily tier rate × days × travelers, split across
//! spending categories by a single canonical ratio table.

use serde::Serialize;

use super::catalog::Destination;
use super::{AdvisorError, TravelRequest};

/// Days assumed when the request carries no explicit travel window.
pub const DEFAULT_TRIP_DAYS: i64 = 7;

/// Share of the estimated total allocated to each spending category.
#[derive(Debug, Clone, Copy)]
pub struct BudgetSplit {
    pub transport: f64,
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
    pub shopping: f64,
}

/// The canonical split. Sums to 1.0; this table is the single source of
/// truth for every call site.
pub const BUDGET_SPLIT: BudgetSplit = BudgetSplit {
    transport: 0.30,
    accommodation: 0.35,
    food: 0.20,
    activities: 0.10,
    shopping: 0.05,
};

/// Estimated spend for one trip. Category amounts are rounded to the
/// nearest currency unit; `total` is always computed directly from
/// `daily_budget × days × travelers`, never by summing the rounded parts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetBreakdown {
    pub transport: f64,
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
    pub shopping: f64,
    pub total: f64,
    pub daily_budget: f64,
    pub days: i64,
    pub travelers: u32,
    pub currency: String,
}

/// Length of the travel window in days, falling back to
/// [`DEFAULT_TRIP_DAYS`] when either date is absent. A window shorter
/// than one day counts as one.
pub(super) fn trip_days(request: &TravelRequest) -> Result<i64, AdvisorError> {
    match (request.start_date, request.end_date) {
        (Some(start), Some(end)) => {
            if end < start {
                Err(AdvisorError::InvalidDateRange { start, end })
            } else {
                Ok((end - start).num_days().max(1))
            }
        }
        _ => Ok(DEFAULT_TRIP_DAYS),
    }
}

pub fn calculate_budget(
    destination: &Destination,
    request: &TravelRequest,
) -> Result<BudgetBreakdown, AdvisorError> {
    if request.travelers == 0 {
        return Err(AdvisorError::NoTravelers);
    }
    let days = trip_days(request)?;

    let daily_budget = destination.average_budget.amount_for(request.budget_level);
    let total = daily_budget * days as f64 * request.travelers as f64;

    Ok(BudgetBreakdown {
        transport: (total * BUDGET_SPLIT.transport).round(),
        accommodation: (total * BUDGET_SPLIT.accommodation).round(),
        food: (total * BUDGET_SPLIT.food).round(),
        activities: (total * BUDGET_SPLIT.activities).round(),
        shopping: (total * BUDGET_SPLIT.shopping).round(),
        total,
        daily_budget,
        days,
        travelers: request.travelers,
        currency: destination.currency.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::{destination, request};
    use super::*;
    use crate::store::BudgetTier;
    use chrono::NaiveDate;

    #[test]
    fn moderate_week_for_two_costs_fourteen_hundred() {
        let dest = destination("Indonésie", 100.0);
        let mut req = request("France");
        req.travelers = 2;
        req.budget_level = BudgetTier::Moderate;
        req.start_date = Some(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        req.end_date = Some(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap());

        let breakdown = calculate_budget(&dest, &req).unwrap();
        assert_eq!(breakdown.days, 7);
        assert_eq!(breakdown.total, 1400.0);
    }

    #[test]
    fn total_is_independent_of_rounded_categories() {
        // A daily rate chosen so every category share rounds.
        let dest = destination("Italie", 77.7);
        let mut req = request("France");
        req.travelers = 3;

        let breakdown = calculate_budget(&dest, &req).unwrap();
        let expected_total = 77.7 * DEFAULT_TRIP_DAYS as f64 * 3.0;
        assert_eq!(breakdown.total, expected_total);

        // Rounded parts may drift from the total, but only within rounding
        // slack (half a unit per category).
        let summed = breakdown.transport
            + breakdown.accommodation
            + breakdown.food
            + breakdown.activities
            + breakdown.shopping;
        assert!((summed - expected_total).abs() <= 5.0);
    }

    #[test]
    fn split_table_sums_to_one() {
        let sum = BUDGET_SPLIT.transport
            + BUDGET_SPLIT.accommodation
            + BUDGET_SPLIT.food
            + BUDGET_SPLIT.activities
            + BUDGET_SPLIT.shopping;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn missing_dates_fall_back_to_a_week() {
        let req = request("France");
        assert_eq!(trip_days(&req).unwrap(), DEFAULT_TRIP_DAYS);
    }

    #[test]
    fn same_day_window_counts_as_one_day() {
        let mut req = request("France");
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        req.start_date = Some(day);
        req.end_date = Some(day);
        assert_eq!(trip_days(&req).unwrap(), 1);
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let mut req = request("France");
        req.start_date = Some(NaiveDate::from_ymd_opt(2025, 5, 10).unwrap());
        req.end_date = Some(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert!(matches!(
            trip_days(&req),
            Err(AdvisorError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn zero_travelers_is_rejected() {
        let dest = destination("France", 100.0);
        let mut req = request("France");
        req.travelers = 0;
        assert!(matches!(
            calculate_budget(&dest, &req),
            Err(AdvisorError::NoTravelers)
        ));
    }
}
