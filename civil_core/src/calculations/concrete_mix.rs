//! # Concrete Mix Proportioning
//!
//! Splits a target concrete volume into cement, sand, and aggregate
//! quantities from the grade's nominal mix ratio, plus mixing water from
//! the water-cement ratio.
//!
//! Constituent volumes partition the total volume proportionally to the
//! ratio; the proportional shares always sum to 1.
//!
//! ## Example
//!
//! ```rust
//! use civil_core::calculations::concrete_mix::{compute_mix, MixInput};
//! use civil_core::materials::ConcreteGrade;
//! use civil_core::units::InputUnit;
//!
//! let input = MixInput {
//!     grade: ConcreteGrade::M20,
//!     volume: 1.0,
//!     water_cement_ratio: 0.5,
//!     unit: InputUnit::Meters,
//! };
//!
//! let result = compute_mix(&input).unwrap();
//! assert_eq!(result.cement.weight_kg, 261.82);
//! assert_eq!(result.cement_bags, 5.24);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round_to;
use crate::errors::{CalcError, CalcResult};
use crate::materials::ConcreteGrade;
use crate::units::{InputUnit, FT3_PER_M3};

/// Loose bulk density of cement (kg/m³)
const CEMENT_DENSITY_KG_M3: f64 = 1440.0;
/// Loose bulk density of sand (kg/m³)
const SAND_DENSITY_KG_M3: f64 = 1600.0;
/// Loose bulk density of coarse aggregate (kg/m³)
const AGGREGATE_DENSITY_KG_M3: f64 = 1500.0;
/// Cement bag weight (kg)
const BAG_WEIGHT_KG: f64 = 50.0;

/// Input parameters for the mix calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "grade": "M20",
///   "volume": 1.0,
///   "water_cement_ratio": 0.5,
///   "unit": "meters"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixInput {
    /// Concrete grade (mix ratio lookup)
    pub grade: ConcreteGrade,

    /// Wet concrete volume, in m³ or ft³ depending on `unit`
    pub volume: f64,

    /// Water-cement ratio by weight (e.g., 0.5)
    pub water_cement_ratio: f64,

    /// Measurement system of `volume` ("meters" or "feet")
    pub unit: InputUnit,
}

/// Quantities for a single mix constituent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstituentQuantity {
    /// Weight (kg), 2 decimals
    pub weight_kg: f64,
    /// Volume (m³), 3 decimals
    pub volume_m3: f64,
    /// Volume (ft³), 3 decimals - present only for feet input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_ft3: Option<f64>,
}

/// Results from mix proportioning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteMixResult {
    pub grade: ConcreteGrade,

    /// Total volume in m³ (converted if the input was in feet)
    pub volume_m3: f64,

    /// Mix proportion as "cement:sand:aggregate"
    pub mix_ratio: String,

    pub cement: ConstituentQuantity,
    pub sand: ConstituentQuantity,
    pub aggregate: ConstituentQuantity,

    /// Cement bags of 50 kg, 2 decimals
    pub cement_bags: f64,

    /// Mixing water (liters), 2 decimals
    pub water_liters: f64,
}

/// Proportion a concrete volume into constituent quantities.
///
/// Feet input is converted to cubic meters by cubing the linear conversion
/// factor before any proportioning.
///
/// # Errors
///
/// * [`CalcError::InvalidInput`] if the (converted) volume or the
///   water-cement ratio is not positive
pub fn compute_mix(input: &MixInput) -> CalcResult<ConcreteMixResult> {
    let volume_m3 = input.unit.volume_to_m3(input.volume);

    if volume_m3 <= 0.0 {
        let err = CalcError::invalid_input(
            "volume",
            input.volume.to_string(),
            "Volume must be positive",
        );
        log::error!("Concrete mix calculation error: {}", err);
        return Err(err);
    }
    if input.water_cement_ratio <= 0.0 {
        let err = CalcError::invalid_input(
            "water_cement_ratio",
            input.water_cement_ratio.to_string(),
            "Water-cement ratio must be positive",
        );
        log::error!("Concrete mix calculation error: {}", err);
        return Err(err);
    }

    let ratio = input.grade.mix_ratio();
    let total_ratio = ratio.total();

    let cement_volume = ratio.cement / total_ratio * volume_m3;
    let sand_volume = ratio.sand / total_ratio * volume_m3;
    let aggregate_volume = ratio.aggregate / total_ratio * volume_m3;

    let cement_weight = cement_volume * CEMENT_DENSITY_KG_M3;
    let sand_weight = sand_volume * SAND_DENSITY_KG_M3;
    let aggregate_weight = aggregate_volume * AGGREGATE_DENSITY_KG_M3;

    let cement_bags = cement_weight / BAG_WEIGHT_KG;
    let water_liters = cement_weight * input.water_cement_ratio;

    let ft3 = |volume_m3: f64| -> Option<f64> {
        match input.unit {
            InputUnit::Feet => Some(round_to(volume_m3 * FT3_PER_M3, 3)),
            InputUnit::Meters => None,
        }
    };

    Ok(ConcreteMixResult {
        grade: input.grade,
        volume_m3,
        mix_ratio: ratio.to_string(),
        cement: ConstituentQuantity {
            weight_kg: round_to(cement_weight, 2),
            volume_m3: round_to(cement_volume, 3),
            volume_ft3: ft3(cement_volume),
        },
        sand: ConstituentQuantity {
            weight_kg: round_to(sand_weight, 2),
            volume_m3: round_to(sand_volume, 3),
            volume_ft3: ft3(sand_volume),
        },
        aggregate: ConstituentQuantity {
            weight_kg: round_to(aggregate_weight, 2),
            volume_m3: round_to(aggregate_volume, 3),
            volume_ft3: ft3(aggregate_volume),
        },
        cement_bags: round_to(cement_bags, 2),
        water_liters: round_to(water_liters, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m20_input() -> MixInput {
        MixInput {
            grade: ConcreteGrade::M20,
            volume: 1.0,
            water_cement_ratio: 0.5,
            unit: InputUnit::Meters,
        }
    }

    #[test]
    fn test_m20_reference_values() {
        // M20 is 1:1.5:3, total 5.5
        let result = compute_mix(&m20_input()).unwrap();
        assert_eq!(result.mix_ratio, "1:1.5:3");
        // cement volume = 1/5.5 = 0.1818... m³
        assert_eq!(result.cement.volume_m3, 0.182);
        // cement weight = 0.1818 * 1440 = 261.82 kg
        assert_eq!(result.cement.weight_kg, 261.82);
        // bags = 261.82 / 50 = 5.24
        assert_eq!(result.cement_bags, 5.24);
        // water = 261.82 * 0.5 = 130.91 liters
        assert_eq!(result.water_liters, 130.91);
    }

    #[test]
    fn test_sand_and_aggregate() {
        let result = compute_mix(&m20_input()).unwrap();
        assert_eq!(result.sand.volume_m3, 0.273);
        assert_eq!(result.sand.weight_kg, 436.36);
        assert_eq!(result.aggregate.volume_m3, 0.545);
        assert_eq!(result.aggregate.weight_kg, 818.18);
    }

    #[test]
    fn test_volume_partition_all_grades() {
        // Unrounded constituent volumes sum back to the input volume
        for grade in ConcreteGrade::ALL {
            let ratio = grade.mix_ratio();
            let total = ratio.total();
            let shares =
                ratio.cement / total + ratio.sand / total + ratio.aggregate / total;
            assert!((shares - 1.0).abs() < 1e-9, "shares for {}", grade);

            for volume in [0.5, 1.0, 7.3] {
                let result = compute_mix(&MixInput {
                    grade,
                    volume,
                    ..m20_input()
                })
                .unwrap();
                let sum = result.cement.volume_m3
                    + result.sand.volume_m3
                    + result.aggregate.volume_m3;
                // rounded to 3 decimals, so allow half a unit per term
                assert!(
                    (sum - volume).abs() <= 0.0015,
                    "partition for {} at {} m³",
                    grade,
                    volume
                );
            }
        }
    }

    #[test]
    fn test_feet_input_cubes_linear_factor() {
        // 100 ft³ = 100 / 3.28084³ = 2.8317 m³
        let result = compute_mix(&MixInput {
            volume: 100.0,
            unit: InputUnit::Feet,
            ..m20_input()
        })
        .unwrap();
        assert!((result.volume_m3 - 2.8317).abs() < 1e-3);
        // ft³ volumes reported for feet input
        let cement_ft3 = result.cement.volume_ft3.unwrap();
        assert!((cement_ft3 - 100.0 / 5.5).abs() < 0.05);
    }

    #[test]
    fn test_no_ft3_for_metric_input() {
        let result = compute_mix(&m20_input()).unwrap();
        assert!(result.cement.volume_ft3.is_none());
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("volume_ft3"));
    }

    #[test]
    fn test_invalid_volume() {
        let err = compute_mix(&MixInput {
            volume: 0.0,
            ..m20_input()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_water_cement_ratio() {
        let err = compute_mix(&MixInput {
            water_cement_ratio: -0.5,
            ..m20_input()
        })
        .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_grade_rejected_at_parse() {
        assert_eq!(
            ConcreteGrade::parse("M40").unwrap_err().error_code(),
            "UNKNOWN_GRADE"
        );
    }

    #[test]
    fn test_m15_ratio() {
        let result = compute_mix(&MixInput {
            grade: ConcreteGrade::M15,
            ..m20_input()
        })
        .unwrap();
        assert_eq!(result.mix_ratio, "1:2:4");
        // cement share is 1/7
        assert_eq!(result.cement.volume_m3, 0.143);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let result = compute_mix(&m20_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("cement_bags"));
        let roundtrip: ConcreteMixResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.cement_bags, roundtrip.cement_bags);
    }
}
