use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced by workspace store mutators.
///
/// Reads never error: an absent user, trip, or collection is an empty
/// result. Failed durable writes always surface; in-memory state is only
/// replaced after its write succeeded, so memory never runs ahead of
/// storage.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to persist {key}")]
    Write {
        key: &'static str,
        #[source]
        source: BackendError,
    },

    #[error("failed to encode {key} for storage")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to clear workspace storage")]
    Clear {
        #[source]
        source: BackendError,
    },

    /// The expense half of the dual write succeeded (and is kept, both in
    /// memory and durably) but the trip budget update failed. The caller
    /// can retry the budget half or flag the trip as out of sync.
    #[error("expense {expense_id} was recorded but the budget update for trip {trip_id} failed")]
    BudgetOutOfSync {
        expense_id: String,
        trip_id: String,
        #[source]
        source: Box<StoreError>,
    },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("no verification code is pending")]
    VerificationMissing,

    #[error("verification code has expired")]
    VerificationExpired,

    #[error("verification code does not match")]
    VerificationMismatch,
}
