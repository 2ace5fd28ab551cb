//! Health and vaccination derivation.
//!
//! Everyone gets the hepatitis A/B baseline; destinations in the fixed
//! tropical-risk set add a mandatory yellow fever entry, a typhoid
//! recommendation, and named risks. Unknown countries are valid input and
//! simply keep the baseline.

use serde::Serialize;

/// Destinations treated as tropical-risk, by the catalog's French names.
const TROPICAL_COUNTRIES: [&str; 16] = [
    "Indonésie",
    "Thaïlande",
    "Vietnam",
    "Cambodge",
    "Laos",
    "Philippines",
    "Malaisie",
    "Inde",
    "Sri Lanka",
    "Brésil",
    "Pérou",
    "Colombie",
    "Kenya",
    "Tanzanie",
    "Sénégal",
    "Madagascar",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Vaccination {
    pub name: String,
    /// Mandatory for entry (as opposed to recommended)
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthInfo {
    pub vaccinations: Vec<Vaccination>,
    pub risks: Vec<String>,
    pub medical_insurance: bool,
}

fn is_tropical(country: &str) -> bool {
    TROPICAL_COUNTRIES.contains(&country)
}

pub fn health_info(destination_country: &str) -> HealthInfo {
    let mut vaccinations = vec![
        Vaccination {
            name: "Hépatite A".to_string(),
            required: false,
        },
        Vaccination {
            name: "Hépatite B".to_string(),
            required: false,
        },
    ];
    let mut risks = Vec::new();

    if is_tropical(destination_country) {
        vaccinations.push(Vaccination {
            name: "Fièvre jaune".to_string(),
            required: true,
        });
        vaccinations.push(Vaccination {
            name: "Typhoïde".to_string(),
            required: false,
        });
        risks.push("Paludisme".to_string());
        risks.push("Dengue".to_string());
    }

    HealthInfo {
        vaccinations,
        risks,
        // Policy: insurance is always recommended, whatever the destination.
        medical_insurance: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tropical_destinations_escalate_vaccinations_and_risks() {
        let health = health_info("Indonésie");
        assert!(health.vaccinations.len() >= 3);
        assert!(health
            .vaccinations
            .iter()
            .any(|v| v.name == "Fièvre jaune" && v.required));
        assert!(health.risks.iter().any(|r| r == "Paludisme"));
    }

    #[test]
    fn temperate_destinations_keep_the_baseline() {
        let health = health_info("Allemagne");
        assert_eq!(health.vaccinations.len(), 2);
        assert!(health.vaccinations.iter().all(|v| !v.required));
        assert!(health.risks.is_empty());
    }

    #[test]
    fn unknown_countries_are_not_an_error() {
        let health = health_info("Atlantide");
        assert_eq!(health.vaccinations.len(), 2);
    }

    #[test]
    fn insurance_is_always_recommended() {
        assert!(health_info("France").medical_insurance);
        assert!(health_info("Indonésie").medical_insurance);
    }
}
