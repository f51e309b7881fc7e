//! # Reinforcement Bar Weight
//!
//! Per-bar weight from the standard approximation `W = d²/162 × L`, with
//! d in mm and L in meters, aggregated across a bar list.
//!
//! Entries with non-positive diameter, length, or quantity are skipped
//! silently - a deliberate filtering rule, not an error path. The report
//! fails only if nothing survives the filter.
//!
//! ## Example
//!
//! ```rust
//! use civil_core::calculations::steel_weight::{compute_steel_weight, SteelBarSpec};
//! use civil_core::units::InputUnit;
//!
//! let bars = vec![SteelBarSpec { diameter_mm: 16.0, length: 1.0, quantity: 1 }];
//! let report = compute_steel_weight(&bars, InputUnit::Meters).unwrap();
//! // 16²/162 = 1.580 kg per meter
//! assert_eq!(report.bars[0].weight_per_bar_kg, 1.58);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round_to;
use crate::errors::{CalcError, CalcResult};
use crate::units::{InputUnit, LB_PER_KG};

/// Denominator of the approximate steel-weight formula d²/162 (kg per
/// meter for d in mm)
const WEIGHT_FORMULA_DIVISOR: f64 = 162.0;

/// One bar specification.
///
/// ## JSON Example
///
/// ```json
/// { "diameter_mm": 16.0, "length": 12.0, "quantity": 10 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteelBarSpec {
    /// Bar diameter (mm)
    pub diameter_mm: f64,

    /// Bar length, in meters or feet depending on the report unit
    pub length: f64,

    /// Number of identical bars
    pub quantity: i64,
}

impl SteelBarSpec {
    /// Whether this entry participates in the report (all fields positive)
    fn is_countable(&self) -> bool {
        self.diameter_mm > 0.0 && self.length > 0.0 && self.quantity > 0
    }
}

/// Computed weights for one bar entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteelBarResult {
    pub diameter_mm: f64,
    /// Length as entered (meters or feet)
    pub length: f64,
    pub quantity: i64,

    /// Weight of a single bar (kg), 3 decimals
    pub weight_per_bar_kg: f64,
    /// Weight of all bars in this entry (kg), 3 decimals
    pub total_weight_kg: f64,

    /// Pound equivalents, present only for feet input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_per_bar_lb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight_lb: Option<f64>,
}

/// Aggregated steel weight report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteelWeightReport {
    pub bars: Vec<SteelBarResult>,

    /// Sum of entry totals (kg), 2 decimals
    pub total_weight_kg: f64,

    /// Total bar count across non-skipped entries
    pub total_bars: i64,

    /// Measurement system of the input lengths
    pub unit: InputUnit,

    /// Total in pounds, present only for feet input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight_lb: Option<f64>,
}

/// Compute the aggregate weight of a list of reinforcement bars.
///
/// Lengths in feet are converted to meters before the weight formula is
/// applied, and pound equivalents are reported alongside kilograms.
///
/// # Errors
///
/// * [`CalcError::InvalidInput`] if the bar list is empty after skipping
///   non-positive entries
pub fn compute_steel_weight(
    bars: &[SteelBarSpec],
    unit: InputUnit,
) -> CalcResult<SteelWeightReport> {
    let mut bar_results = Vec::new();
    let mut total_weight_kg = 0.0;
    let mut total_bars = 0;

    for bar in bars.iter().filter(|b| b.is_countable()) {
        let length_m = unit.length_to_m(bar.length);

        let weight_per_bar = bar.diameter_mm * bar.diameter_mm / WEIGHT_FORMULA_DIVISOR * length_m;
        let entry_weight = weight_per_bar * bar.quantity as f64;
        total_weight_kg += entry_weight;
        total_bars += bar.quantity;

        let lb = |kg: f64| -> Option<f64> {
            match unit {
                InputUnit::Feet => Some(round_to(kg * LB_PER_KG, 3)),
                InputUnit::Meters => None,
            }
        };

        bar_results.push(SteelBarResult {
            diameter_mm: bar.diameter_mm,
            length: bar.length,
            quantity: bar.quantity,
            weight_per_bar_kg: round_to(weight_per_bar, 3),
            total_weight_kg: round_to(entry_weight, 3),
            weight_per_bar_lb: lb(weight_per_bar),
            total_weight_lb: lb(entry_weight),
        });
    }

    if bar_results.is_empty() {
        let err = CalcError::invalid_input(
            "bars",
            format!("{} entries", bars.len()),
            "At least one bar with positive diameter, length, and quantity is required",
        );
        log::error!("Steel weight calculation error: {}", err);
        return Err(err);
    }

    let total_weight_lb = match unit {
        InputUnit::Feet => Some(round_to(total_weight_kg * LB_PER_KG, 2)),
        InputUnit::Meters => None,
    };

    Ok(SteelWeightReport {
        bars: bar_results,
        total_weight_kg: round_to(total_weight_kg, 2),
        total_bars,
        unit,
        total_weight_lb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(diameter_mm: f64, length: f64, quantity: i64) -> SteelBarSpec {
        SteelBarSpec {
            diameter_mm,
            length,
            quantity,
        }
    }

    #[test]
    fn test_16mm_reference_weight() {
        // 16²/162 = 1.580 kg for a 1 m bar
        let report = compute_steel_weight(&[bar(16.0, 1.0, 1)], InputUnit::Meters).unwrap();
        assert_eq!(report.bars[0].weight_per_bar_kg, 1.58);
        assert_eq!(report.total_weight_kg, 1.58);
        assert_eq!(report.total_bars, 1);
    }

    #[test]
    fn test_quantity_aggregation() {
        let report =
            compute_steel_weight(&[bar(12.0, 6.0, 10), bar(8.0, 3.0, 20)], InputUnit::Meters)
                .unwrap();
        // 12²/162*6 = 5.333 kg/bar, 144/162*6*10 = 53.333 kg total
        assert_eq!(report.bars[0].weight_per_bar_kg, 5.333);
        assert_eq!(report.bars[0].total_weight_kg, 53.333);
        // 8²/162*3 = 1.185 kg/bar, * 20 = 23.704 kg
        assert_eq!(report.bars[1].total_weight_kg, 23.704);
        assert_eq!(report.total_weight_kg, 77.04);
        assert_eq!(report.total_bars, 30);
    }

    #[test]
    fn test_weight_monotonic_in_diameter() {
        let d12 = compute_steel_weight(&[bar(12.0, 6.0, 1)], InputUnit::Meters).unwrap();
        let d16 = compute_steel_weight(&[bar(16.0, 6.0, 1)], InputUnit::Meters).unwrap();
        let d20 = compute_steel_weight(&[bar(20.0, 6.0, 1)], InputUnit::Meters).unwrap();
        assert!(d12.total_weight_kg < d16.total_weight_kg);
        assert!(d16.total_weight_kg < d20.total_weight_kg);
    }

    #[test]
    fn test_feet_lengths_converted() {
        // 3.28084 ft = 1 m, so this equals the 1 m reference bar
        let report =
            compute_steel_weight(&[bar(16.0, 3.28084, 1)], InputUnit::Feet).unwrap();
        assert_eq!(report.bars[0].weight_per_bar_kg, 1.58);
        // pound equivalents reported
        let lb = report.bars[0].weight_per_bar_lb.unwrap();
        assert!((lb - 1.58 * 2.20462).abs() < 0.01);
        assert!(report.total_weight_lb.is_some());
    }

    #[test]
    fn test_no_pounds_for_metric_input() {
        let report = compute_steel_weight(&[bar(16.0, 1.0, 1)], InputUnit::Meters).unwrap();
        assert!(report.total_weight_lb.is_none());
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("total_weight_lb"));
    }

    #[test]
    fn test_non_positive_entries_skipped() {
        let report = compute_steel_weight(
            &[
                bar(16.0, 1.0, 1),
                bar(0.0, 5.0, 3),
                bar(12.0, -2.0, 4),
                bar(10.0, 2.0, 0),
            ],
            InputUnit::Meters,
        )
        .unwrap();
        // only the first entry survives the filter
        assert_eq!(report.bars.len(), 1);
        assert_eq!(report.total_bars, 1);
        assert_eq!(report.total_weight_kg, 1.58);
    }

    #[test]
    fn test_empty_after_filtering() {
        let err = compute_steel_weight(&[bar(0.0, 1.0, 1)], InputUnit::Meters).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_empty_list() {
        let err = compute_steel_weight(&[], InputUnit::Meters).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let report =
            compute_steel_weight(&[bar(16.0, 12.0, 10)], InputUnit::Meters).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("total_weight_kg"));
        let roundtrip: SteelWeightReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.total_weight_kg, roundtrip.total_weight_kg);
        assert_eq!(report.total_bars, roundtrip.total_bars);
    }
}
