//! # Simply-Supported RCC Beam Design
//!
//! Sizes a simply-supported reinforced concrete beam under a uniformly
//! distributed load and selects main reinforcement.
//!
//! ## Assumptions
//!
//! - Simply-supported boundary conditions with full-span UDL
//! - Effective depth from the span/10 slenderness rule of thumb
//! - 50 mm cover allowance, width taken as half the overall depth
//! - Simplified working-stress steel area: Ast = M / (0.87·fy·0.9·d)
//! - Minimum steel 0.85% of gross section per IS 456
//! - 16 mm main bars
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use civil_core::calculations::beam::{design_beam, BeamDesignInput};
//! use civil_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let input = BeamDesignInput {
//!     span_m: 5.0,
//!     load_kn_per_m: 20.0,
//!     concrete_grade: ConcreteGrade::M25,
//!     steel_grade: SteelGrade::Fe415,
//! };
//!
//! let result = design_beam(&input).unwrap();
//! println!("Section: {} x {} mm", result.beam_width_mm, result.beam_depth_mm);
//! println!("Bars: {} x 16 mm", result.num_bars);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round_to;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConcreteGrade, SteelGrade};

/// Diameter of the assumed main reinforcement bars (mm)
const MAIN_BAR_DIAMETER_MM: f64 = 16.0;

/// Cover plus bar-diameter allowance added to effective depth (mm)
const COVER_ALLOWANCE_MM: f64 = 50.0;

/// Minimum steel as a fraction of gross cross-section (IS 456)
const MIN_STEEL_RATIO: f64 = 0.0085;

/// Input parameters for beam design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 5.0,
///   "load_kn_per_m": 20.0,
///   "concrete_grade": "M25",
///   "steel_grade": "Fe415"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamDesignInput {
    /// Clear span in meters
    pub span_m: f64,

    /// Uniformly distributed load in kN/m
    pub load_kn_per_m: f64,

    /// Concrete grade (fck lookup)
    pub concrete_grade: ConcreteGrade,

    /// Steel grade (fy and density lookup)
    pub steel_grade: SteelGrade,
}

impl BeamDesignInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.span_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "span_m",
                self.span_m.to_string(),
                "Span must be positive",
            ));
        }
        if self.load_kn_per_m <= 0.0 {
            return Err(CalcError::invalid_input(
                "load_kn_per_m",
                self.load_kn_per_m.to_string(),
                "Load must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from beam design.
///
/// Dimensions and steel areas are rounded to whole numbers, the moment to
/// 2 decimals, volume to 3 and weight to 2 - matching the presentation
/// precision of each field.
///
/// ## JSON Example
///
/// ```json
/// {
///   "beam_width_mm": 275.0,
///   "beam_depth_mm": 550.0,
///   "effective_depth_mm": 500.0,
///   "moment_knm": 62.5,
///   "steel_area_required_mm2": 1286.0,
///   "steel_area_provided_mm2": 1407.0,
///   "num_bars": 7,
///   "concrete_volume_m3": 0.756,
///   "steel_weight_kg": 386.69,
///   "fck_nmm2": 25.0,
///   "fy_nmm2": 415.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamDesignResult {
    /// Beam width b (mm), taken as half the overall depth
    pub beam_width_mm: f64,

    /// Overall depth D (mm) = effective depth + cover allowance
    pub beam_depth_mm: f64,

    /// Effective depth d (mm) from the span/10 rule
    pub effective_depth_mm: f64,

    /// Maximum bending moment M = wL²/8 (kN·m)
    pub moment_knm: f64,

    /// Required steel area Ast (mm²), floored at the code minimum
    pub steel_area_required_mm2: f64,

    /// Provided steel area (mm²) = bar count x single-bar area
    pub steel_area_provided_mm2: f64,

    /// Number of 16 mm main bars
    pub num_bars: u32,

    /// Concrete volume of the member (m³)
    pub concrete_volume_m3: f64,

    /// Self-weight of the main reinforcement (kg)
    pub steel_weight_kg: f64,

    /// Concrete characteristic strength used (N/mm²)
    pub fck_nmm2: f64,

    /// Steel yield strength used (N/mm²)
    pub fy_nmm2: f64,
}

/// Design a simply-supported RCC beam.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Errors
///
/// * [`CalcError::InvalidInput`] if span or load is not positive
///
/// Unknown grades are rejected earlier, when the grade strings are parsed
/// into [`ConcreteGrade`] / [`SteelGrade`].
pub fn design_beam(input: &BeamDesignInput) -> CalcResult<BeamDesignResult> {
    input.validate().inspect_err(|e| {
        log::error!("Beam calculation error: {}", e);
    })?;

    let fck = input.concrete_grade.fck_nmm2();
    let fy = input.steel_grade.fy_nmm2();

    let span_mm = input.span_m * 1000.0;

    // Maximum bending moment for simply supported beam with UDL
    let moment_knm = input.load_kn_per_m * input.span_m.powi(2) / 8.0;
    let moment_nmm = moment_knm * 1_000_000.0;

    // Section sizing: span/10 rule of thumb, 50 mm cover, width = depth/2
    let effective_depth = span_mm / 10.0;
    let overall_depth = effective_depth + COVER_ALLOWANCE_MM;
    let width = overall_depth / 2.0;

    // Required steel area, simplified working-stress formula
    let ast_flexure = moment_nmm / (0.87 * fy * 0.9 * effective_depth);

    // Minimum steel floor (0.85% of gross area)
    let min_steel = MIN_STEEL_RATIO * width * overall_depth;
    let ast_required = ast_flexure.max(min_steel);

    // Bar selection: 16 mm bars
    let bar_area = std::f64::consts::PI * MAIN_BAR_DIAMETER_MM.powi(2) / 4.0;
    let num_bars = (ast_required / bar_area).ceil() as u32;
    let actual_steel = num_bars as f64 * bar_area;

    // Concrete volume (mm³ -> m³)
    let concrete_volume_m3 = width * overall_depth * span_mm / 1e9;

    // Main bar self-weight: area (mm²) x total bar length (m) / 1e6 -> m³
    let steel_density = input.steel_grade.density_kg_m3();
    let steel_length_m = input.span_m * num_bars as f64;
    let steel_volume_m3 = actual_steel * steel_length_m / 1e6;
    let steel_weight_kg = steel_volume_m3 * steel_density;

    Ok(BeamDesignResult {
        beam_width_mm: round_to(width, 0),
        beam_depth_mm: round_to(overall_depth, 0),
        effective_depth_mm: round_to(effective_depth, 0),
        moment_knm: round_to(moment_knm, 2),
        steel_area_required_mm2: round_to(ast_required, 0),
        steel_area_provided_mm2: round_to(actual_steel, 0),
        num_bars,
        concrete_volume_m3: round_to(concrete_volume_m3, 3),
        steel_weight_kg: round_to(steel_weight_kg, 2),
        fck_nmm2: fck,
        fy_nmm2: fy,
    })
}
