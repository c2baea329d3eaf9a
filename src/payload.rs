//! Input validation for production plan requests.
//!
//! Turns an already-decoded JSON document into a [`DispatchRequest`] or a
//! single [`DispatchError::InvalidPayload`]. The detail string names the
//! offending JSON path or validation rule.

use std::collections::HashSet;

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::domain::{DispatchRequest, FuelPrices, PlantSpec};
use crate::error::{DispatchError, Result};

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_names"))]
struct RawPayload {
    #[serde(deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.0))]
    load: f64,
    fuels: FuelPrices,
    #[validate(nested)]
    powerplants: Vec<PlantSpec>,
}

fn validate_unique_names(payload: &RawPayload) -> std::result::Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(payload.powerplants.len());
    for plant in &payload.powerplants {
        if !seen.insert(plant.name.as_str()) {
            let mut error = ValidationError::new("duplicate_plant_name");
            error.message = Some(format!("plant name '{}' is used more than once", plant.name).into());
            return Err(error);
        }
    }
    Ok(())
}

/// Accepts a JSON number or a string holding one. Non-finite values are
/// rejected.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => value,
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("'{text}' is not a number")))?,
    };

    if !value.is_finite() {
        return Err(D::Error::custom("number must be finite"));
    }
    Ok(value)
}

/// Check a decoded payload and convert it into a typed request
pub fn validate(raw: &Value) -> Result<DispatchRequest> {
    let payload: RawPayload = serde_path_to_error::deserialize(raw)
        .map_err(|e| DispatchError::InvalidPayload(e.to_string()))?;
    payload.validate()?;

    Ok(DispatchRequest {
        load: payload.load,
        fuels: payload.fuels,
        plants: payload.powerplants,
    })
}

/// Decode a request body and validate it. Malformed JSON is an invalid
/// payload like any other.
pub fn validate_slice(body: &[u8]) -> Result<DispatchRequest> {
    let raw: Value = serde_json::from_slice(body)?;
    validate(&raw)
}
