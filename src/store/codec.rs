//! Entity codec: collections round-trip through the backend as JSON text.
//!
//! Optional fields are serialized as absent (not null) so that
//! `decode(encode(e)) == e` holds field-for-field for every entity.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(text)
}
