pub mod allocation;
pub mod annotate;
pub mod exhaustive;
pub mod types;

pub use annotate::*;
pub use exhaustive::*;
pub use types::*;

use crate::domain::{DispatchResult, FuelPrices, PlantSpec};
use crate::error::Result;

/// Cheapest way to produce exactly `load` MW with the given plants.
///
/// Annotates the plants with their costs and runs the exhaustive search.
pub fn dispatch(load: f64, fuels: &FuelPrices, plants: &[PlantSpec]) -> Result<DispatchResult> {
    let enriched = annotate(fuels, plants)?;
    ExhaustiveSearch.solve(load, &enriched)
}
