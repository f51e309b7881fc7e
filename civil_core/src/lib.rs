//! # civil_core - Civil Engineering Calculation Engine
//!
//! `civil_core` is the computational heart of Sitecalc, providing civil
//! engineering calculators with a clean, LLM-friendly API. All inputs and
//! outputs are JSON-serializable, making it ideal for integration with AI
//! assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Compiled-In Data**: All grade tables and coefficients are constants;
//!   the engine reads no configuration, environment, or files
//!
//! ## Quick Start
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
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! println!("{}", json);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All calculator types (beam, estimation, scheduling,
//!   concrete mix, steel weight)
//! - [`materials`] - Static concrete and steel grade tables
//! - [`units`] - Unit conversion between fixed per-domain unit sets
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use materials::{ConcreteGrade, SteelGrade};
pub use units::{convert, ConversionDomain, InputUnit};
