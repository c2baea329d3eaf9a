use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use validator::{Validate, ValidationError};

use crate::payload::lenient_f64;

/// Generation technology of a plant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlantKind {
    GasFired,
    Turbojet,
    WindTurbine,
}

/// A power plant as it arrives on the wire.
///
/// `plant_type` stays a raw string here; it is resolved into [`PlantKind`]
/// when costs are annotated so that an unknown type is reported as such
/// rather than as a malformed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_output_range"))]
pub struct PlantSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: String,
    #[serde(deserialize_with = "lenient_f64")]
    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub efficiency: f64,
    #[serde(deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.0))]
    pub pmin: f64,
    #[serde(deserialize_with = "lenient_f64")]
    #[validate(range(min = 0.0))]
    pub pmax: f64,
}

fn validate_output_range(plant: &PlantSpec) -> Result<(), ValidationError> {
    if plant.pmin > plant.pmax {
        let mut error = ValidationError::new("pmin_above_pmax");
        error.message = Some(format!("plant '{}' has pmin above pmax", plant.name).into());
        return Err(error);
    }
    Ok(())
}

/// A plant with its marginal cost and effective output range.
///
/// For wind turbines `pmin == pmax`: their output is fixed by the available
/// wind and they are either dispatched at that output or not at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPlant {
    pub name: String,
    pub kind: PlantKind,
    /// Euro per MWh produced
    pub cost: f64,
    pub pmin: f64,
    pub pmax: f64,
}

impl EnrichedPlant {
    /// Output that can be added on top of pmin
    pub fn headroom(&self) -> f64 {
        self.pmax - self.pmin
    }
}
