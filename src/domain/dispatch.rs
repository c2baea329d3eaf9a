use serde::Serialize;

use super::{FuelPrices, PlantSpec};

/// A validated dispatch request
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    /// Demand to cover, in MW
    pub load: f64,
    pub fuels: FuelPrices,
    pub plants: Vec<PlantSpec>,
}

/// Power assigned to one plant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantOutput {
    pub name: String,
    /// Output in MW
    pub p: f64,
}

/// The chosen combination of plants and their outputs, in merit order.
/// Plants outside the combination are not listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchResult {
    pub outputs: Vec<PlantOutput>,
    /// Euro per hour of the whole combination
    pub total_cost: f64,
}

impl DispatchResult {
    pub fn total_power(&self) -> f64 {
        self.outputs.iter().map(|o| o.p).sum()
    }

    pub fn power_of(&self, name: &str) -> Option<f64> {
        self.outputs.iter().find(|o| o.name == name).map(|o| o.p)
    }
}
