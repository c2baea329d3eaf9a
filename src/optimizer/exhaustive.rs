use itertools::Itertools;
use tracing::debug;

use super::allocation::{allocate, allocate_powers, is_feasible, merit_order};
use super::DispatchStrategy;
use crate::domain::{DispatchResult, EnrichedPlant};
use crate::error::{DispatchError, Result};

/// Tries every non-empty combination of plants and keeps the cheapest
/// feasible one.
///
/// Combinations are visited by increasing size, and lexicographically over
/// the merit order within a size. Only a strictly cheaper combination
/// replaces the current best, so among equal-cost combinations the first
/// visited wins. The search visits `2^n - 1` combinations and is meant for
/// small fleets.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSearch;

impl DispatchStrategy for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve(&self, load: f64, plants: &[EnrichedPlant]) -> Result<DispatchResult> {
        let ordered = merit_order(plants);

        let mut best: Option<(f64, Vec<&EnrichedPlant>)> = None;
        let mut feasible = 0usize;

        for size in 1..=ordered.len() {
            for combination in ordered.iter().copied().combinations(size) {
                if !is_feasible(load, &combination) {
                    continue;
                }
                feasible += 1;

                let (_, cost) = allocate_powers(load, &combination);
                if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                    best = Some((cost, combination));
                }
            }
        }

        debug!(load, plants = plants.len(), feasible, "exhaustive search finished");

        best.map(|(_, combination)| allocate(load, &combination))
            .ok_or(DispatchError::NoFeasibleSolution { load })
    }
}
