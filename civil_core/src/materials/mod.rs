//! # Materials Database
//!
//! Static material grade tables for civil engineering calculations.
//! Each grade maps to fixed strength and density constants; the tables are
//! immutable, process-wide data with no configuration or I/O behind them.
//!
//! ## Example
//!
//! ```rust
//! use civil_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let concrete = ConcreteGrade::parse("M25").unwrap();
//! let steel = SteelGrade::parse("Fe500").unwrap();
//!
//! assert_eq!(concrete.fck_nmm2(), 25.0);
//! assert_eq!(steel.fy_nmm2(), 500.0);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::{ConcreteGrade, MixRatio};
pub use steel::{SteelGrade, STEEL_DENSITY_KG_M3};
