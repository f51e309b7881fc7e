//! # Engineering Calculations
//!
//! This module contains all calculator types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - A pure function `... -> Result<*Result, CalcError>`
//!
//! All calculators are stateless: results depend only on their inputs, and
//! every entity is computed once, returned, and discarded.
//!
//! ## Available Calculations
//!
//! - [`beam`] - Simply-supported RCC beam sizing and reinforcement
//! - [`estimate`] - Material quantity and cost estimation (BOQ)
//! - [`schedule`] - Sequential project scheduling
//! - [`concrete_mix`] - Concrete mix proportioning by grade
//! - [`steel_weight`] - Reinforcement bar weight

pub mod beam;
pub mod concrete_mix;
pub mod estimate;
pub mod schedule;
pub mod steel_weight;

// Re-export commonly used types
pub use beam::{design_beam, BeamDesignInput, BeamDesignResult};
pub use concrete_mix::{compute_mix, ConcreteMixResult, MixInput};
pub use estimate::{
    estimate_by_type, estimate_quantities, ConstructionType, QuantityEstimate, QuantityInput,
    TypeEstimate,
};
pub use schedule::{build_schedule, build_schedule_from, Schedule, ScheduledTask, TaskInput};
pub use steel_weight::{compute_steel_weight, SteelBarSpec, SteelWeightReport};

/// Round to a fixed number of decimal places.
///
/// Result records carry presentation rounding explicitly so tests can assert
/// exact values.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
