use ordered_float::OrderedFloat;

use crate::domain::{DispatchResult, EnrichedPlant, PlantOutput};

/// Round to one decimal, the granularity of every published output.
/// Halfway cases round away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Plants sorted by ascending cost. The sort is stable, so plants with equal
/// cost keep their input order.
pub fn merit_order(plants: &[EnrichedPlant]) -> Vec<&EnrichedPlant> {
    let mut ordered: Vec<&EnrichedPlant> = plants.iter().collect();
    ordered.sort_by_key(|plant| OrderedFloat(plant.cost));
    ordered
}

/// Combined (min, max) output of a combination
pub fn output_range(plants: &[&EnrichedPlant]) -> (f64, f64) {
    plants
        .iter()
        .fold((0.0, 0.0), |(min, max), plant| (min + plant.pmin, max + plant.pmax))
}

pub fn is_feasible(load: f64, plants: &[&EnrichedPlant]) -> bool {
    let (min, max) = output_range(plants);
    min <= load && load <= max
}

/// Fill a feasible combination in the given order: every plant starts at
/// its pmin and the remaining demand goes to the earliest plants first.
///
/// Returns each plant's output and the combination's total cost.
pub fn allocate_powers(load: f64, plants: &[&EnrichedPlant]) -> (Vec<f64>, f64) {
    let (mut current, _) = output_range(plants);
    let mut powers = Vec::with_capacity(plants.len());
    let mut total_cost = 0.0;

    for plant in plants {
        let delta = round_to_tenth((load - current).min(plant.headroom()).max(0.0));
        current += delta;

        let power = plant.pmin + delta;
        total_cost += power * plant.cost;
        powers.push(power);
    }

    (powers, total_cost)
}

/// Same as [`allocate_powers`], packaged as a [`DispatchResult`]
pub fn allocate(load: f64, plants: &[&EnrichedPlant]) -> DispatchResult {
    let (powers, total_cost) = allocate_powers(load, plants);
    let outputs = plants
        .iter()
        .zip(powers)
        .map(|(plant, p)| PlantOutput {
            name: plant.name.clone(),
            p,
        })
        .collect();

    DispatchResult {
        outputs,
        total_cost,
    }
}
