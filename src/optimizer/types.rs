use tracing::debug;

use super::{annotate, ExhaustiveSearch};
use crate::domain::{DispatchRequest, DispatchResult, EnrichedPlant};
use crate::error::Result;

/// A way of choosing plants and their outputs for a load.
///
/// Implementations must return the same selection as [`ExhaustiveSearch`]:
/// the cheapest feasible combination, first found on equal cost.
pub trait DispatchStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn solve(&self, load: f64, plants: &[EnrichedPlant]) -> Result<DispatchResult>;
}

pub struct ProductionPlanner {
    pub strategy: Box<dyn DispatchStrategy>,
}

impl ProductionPlanner {
    pub fn new(strategy: Box<dyn DispatchStrategy>) -> Self {
        Self { strategy }
    }

    /// Annotate the request's plants and solve for its load
    pub fn plan(&self, request: &DispatchRequest) -> Result<DispatchResult> {
        let plants = annotate(&request.fuels, &request.plants)?;
        debug!(
            strategy = self.strategy.name(),
            load = request.load,
            plants = plants.len(),
            "planning production"
        );
        self.strategy.solve(request.load, &plants)
    }
}

impl Default for ProductionPlanner {
    fn default() -> Self {
        Self::new(Box::new(ExhaustiveSearch))
    }
}
