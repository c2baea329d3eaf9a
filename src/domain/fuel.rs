use serde::{Deserialize, Serialize};

use crate::payload::lenient_f64;

/// Fuel price table of a dispatch request.
///
/// The key set is closed: every key must be present and no other key is
/// accepted. No range restriction is applied to the values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FuelPrices {
    #[serde(rename = "gas(euro/MWh)", deserialize_with = "lenient_f64")]
    pub gas_euro_per_mwh: f64,
    #[serde(rename = "kerosine(euro/MWh)", deserialize_with = "lenient_f64")]
    pub kerosine_euro_per_mwh: f64,
    /// Accepted but not part of any cost computation yet.
    #[serde(rename = "co2(euro/ton)", deserialize_with = "lenient_f64")]
    pub co2_euro_per_ton: f64,
    #[serde(rename = "wind(%)", deserialize_with = "lenient_f64")]
    pub wind_percent: f64,
}

impl FuelPrices {
    /// Available wind as a fraction of installed capacity
    pub fn wind_fraction(&self) -> f64 {
        self.wind_percent / 100.0
    }
}
