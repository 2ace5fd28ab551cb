//! Visa requirement derivation.
//!
//! A static rule table keyed by destination country, using the French
//! country names the catalog carries. This is configuration, not a live
//! government-data integration; unknown countries resolve to the default
//! branch rather than erroring.

use serde::Serialize;

/// EU member states. Free movement applies when both the traveler's
/// nationality and the destination are in this set.
const EU_MEMBERS: [&str; 27] = [
    "Allemagne",
    "Autriche",
    "Belgique",
    "Bulgarie",
    "Chypre",
    "Croatie",
    "Danemark",
    "Espagne",
    "Estonie",
    "Finlande",
    "France",
    "Grèce",
    "Hongrie",
    "Irlande",
    "Italie",
    "Lettonie",
    "Lituanie",
    "Luxembourg",
    "Malte",
    "Pays-Bas",
    "Pologne",
    "Portugal",
    "République tchèque",
    "Roumanie",
    "Slovaquie",
    "Slovénie",
    "Suède",
];

const UNITED_STATES: &str = "États-Unis";

/// ESTA fee in USD
const ESTA_COST: f64 = 21.0;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisaRequirement {
    pub required: bool,
    pub visa_type: String,
    /// Maximum authorized stay
    pub duration: String,
    /// Fee in USD; 0 when entry is free
    pub cost: f64,
    pub processing_time: String,
    pub documents: Vec<String>,
}

fn is_eu(country: &str) -> bool {
    EU_MEMBERS.contains(&country)
}

pub fn visa_requirement(destination_country: &str, nationality: &str) -> VisaRequirement {
    if is_eu(nationality) && is_eu(destination_country) {
        return VisaRequirement {
            required: false,
            visa_type: "Libre circulation".to_string(),
            duration: "Illimitée".to_string(),
            cost: 0.0,
            processing_time: "Aucune".to_string(),
            documents: vec!["Carte d'identité ou passeport en cours de validité".to_string()],
        };
    }

    if destination_country == UNITED_STATES {
        return VisaRequirement {
            required: true,
            visa_type: "ESTA".to_string(),
            duration: "90 jours".to_string(),
            cost: ESTA_COST,
            processing_time: "72 heures".to_string(),
            documents: vec![
                "Passeport biométrique ou électronique".to_string(),
                "Formulaire ESTA approuvé avant l'embarquement".to_string(),
                "Billet de retour ou de continuation".to_string(),
            ],
        };
    }

    VisaRequirement {
        required: false,
        visa_type: "Exemption de visa".to_string(),
        duration: "90 jours".to_string(),
        cost: 0.0,
        processing_time: "Aucune".to_string(),
        documents: vec![
            "Passeport valide 6 mois après la date de retour".to_string(),
            "Billet de retour ou de continuation".to_string(),
            "Justificatif d'hébergement".to_string(),
        ],
    }
}
