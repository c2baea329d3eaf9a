use std::str::FromStr;

use super::allocation::round_to_tenth;
use crate::domain::{EnrichedPlant, FuelPrices, PlantKind, PlantSpec};
use crate::error::{DispatchError, Result};

/// Compute the marginal cost and effective output range of one plant.
///
/// Wind turbines produce exactly the available wind share of their pmax at
/// zero cost; fuel-burning plants keep their range and pay fuel price over
/// efficiency.
pub fn annotate_plant(fuels: &FuelPrices, plant: &PlantSpec) -> Result<EnrichedPlant> {
    let kind = PlantKind::from_str(&plant.plant_type)
        .map_err(|_| DispatchError::UnknownPlantType(plant.plant_type.clone()))?;

    let (cost, pmin, pmax) = match kind {
        PlantKind::GasFired => (
            fuels.gas_euro_per_mwh / plant.efficiency,
            plant.pmin,
            plant.pmax,
        ),
        PlantKind::Turbojet => (
            fuels.kerosine_euro_per_mwh / plant.efficiency,
            plant.pmin,
            plant.pmax,
        ),
        PlantKind::WindTurbine => {
            let available = round_to_tenth(fuels.wind_fraction() * plant.pmax);
            (0.0, available, available)
        }
    };

    Ok(EnrichedPlant {
        name: plant.name.clone(),
        kind,
        cost,
        pmin,
        pmax,
    })
}

/// Annotate every plant, failing on the first unknown plant type
pub fn annotate(fuels: &FuelPrices, plants: &[PlantSpec]) -> Result<Vec<EnrichedPlant>> {
    plants
        .iter()
        .map(|plant| annotate_plant(fuels, plant))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn fuels(wind_percent: f64) -> FuelPrices {
        FuelPrices {
            gas_euro_per_mwh: 13.4,
            kerosine_euro_per_mwh: 50.8,
            co2_euro_per_ton: 20.0,
            wind_percent,
        }
    }

    fn spec(plant_type: &str, efficiency: f64, pmin: f64, pmax: f64) -> PlantSpec {
        PlantSpec {
            name: format!("{plant_type}-1"),
            plant_type: plant_type.to_string(),
            efficiency,
            pmin,
            pmax,
        }
    }

    #[rstest]
    #[case("gasfired", 0.53, 100.0, 460.0, 25.283, 100.0, 460.0)]
    #[case("gasfired", 0.37, 40.0, 210.0, 36.216, 40.0, 210.0)]
    #[case("turbojet", 0.3, 0.0, 16.0, 169.333, 0.0, 16.0)]
    #[case("windturbine", 1.0, 0.0, 150.0, 0.0, 90.0, 90.0)]
    #[case("windturbine", 1.0, 0.0, 36.0, 0.0, 21.6, 21.6)]
    fn test_annotate_by_kind(
        #[case] plant_type: &str,
        #[case] efficiency: f64,
        #[case] pmin: f64,
        #[case] pmax: f64,
        #[case] expected_cost: f64,
        #[case] expected_pmin: f64,
        #[case] expected_pmax: f64,
    ) {
        let plant = annotate_plant(&fuels(60.0), &spec(plant_type, efficiency, pmin, pmax)).unwrap();

        assert_abs_diff_eq!(plant.cost, expected_cost, epsilon = 1e-3);
        assert_eq!(plant.pmin, expected_pmin);
        assert_eq!(plant.pmax, expected_pmax);
    }

    #[test]
    fn test_wind_without_wind() {
        let plant = annotate_plant(&fuels(0.0), &spec("windturbine", 1.0, 0.0, 150.0)).unwrap();
        assert_eq!(plant.pmin, 0.0);
        assert_eq!(plant.pmax, 0.0);
    }

    #[test]
    fn test_wind_ignores_input_pmin() {
        let plant = annotate_plant(&fuels(60.0), &spec("windturbine", 1.0, 10.0, 100.0)).unwrap();
        assert_eq!(plant.kind, PlantKind::WindTurbine);
        assert_eq!(plant.pmin, 60.0);
        assert_eq!(plant.pmax, 60.0);
    }

    #[test]
    fn test_annotation_is_deterministic() {
        let plant = spec("gasfired", 0.53, 100.0, 460.0);
        let first = annotate_plant(&fuels(60.0), &plant).unwrap();
        let second = annotate_plant(&fuels(60.0), &plant).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_co2_price_does_not_change_cost() {
        let plant = spec("gasfired", 0.53, 100.0, 460.0);
        let mut expensive_co2 = fuels(60.0);
        expensive_co2.co2_euro_per_ton = 500.0;

        assert_eq!(
            annotate_plant(&fuels(60.0), &plant).unwrap().cost,
            annotate_plant(&expensive_co2, &plant).unwrap().cost
        );
    }

    #[test]
    fn test_unknown_type_aborts_whole_request() {
        let plants = vec![
            spec("gasfired", 0.53, 100.0, 460.0),
            spec("solar", 1.0, 0.0, 50.0),
            spec("turbojet", 0.3, 0.0, 16.0),
        ];

        assert_eq!(
            annotate(&fuels(60.0), &plants),
            Err(DispatchError::UnknownPlantType("solar".to_string()))
        );
    }

    #[test]
    fn test_annotate_keeps_input_order() {
        let plants = vec![
            spec("turbojet", 0.3, 0.0, 16.0),
            spec("windturbine", 1.0, 0.0, 150.0),
        ];
        let enriched = annotate(&fuels(60.0), &plants).unwrap();
        assert_eq!(enriched[0].kind, PlantKind::Turbojet);
        assert_eq!(enriched[1].kind, PlantKind::WindTurbine);
    }
}
