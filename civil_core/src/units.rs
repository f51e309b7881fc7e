//! # Unit Conversion
//!
//! Engineering unit conversion between a small fixed set of units per domain.
//! Every conversion goes through a canonical unit for its domain:
//!
//! - Length: meters (m)
//! - Weight: kilograms (kg)
//! - Area: square meters (sqm)
//! - Volume: cubic meters (cum)
//! - Pressure: N/mm² (nmm2)
//!
//! Conversion factors are compiled-in constants; no chained multi-domain
//! conversions are supported.
//!
//! ## Example
//!
//! ```rust
//! use civil_core::units::{convert, ConversionDomain};
//!
//! let ft = convert(1.0, ConversionDomain::Length, "m", "ft").unwrap();
//! assert!((ft - 3.28084).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.28084;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Square feet per square meter
pub const SQFT_PER_SQM: f64 = 10.7639;
/// Cubic feet per cubic meter
pub const FT3_PER_M3: f64 = 35.3147;
/// PSI per N/mm²
pub const PSI_PER_NMM2: f64 = 145.038;
/// Square meters per acre
pub const SQM_PER_ACRE: f64 = 4047.0;

/// Conversion domain - each domain has its own unit set and canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionDomain {
    Length,
    Weight,
    Area,
    Volume,
    Pressure,
}

impl ConversionDomain {
    /// All domains for UI selection
    pub const ALL: [ConversionDomain; 5] = [
        ConversionDomain::Length,
        ConversionDomain::Weight,
        ConversionDomain::Area,
        ConversionDomain::Volume,
        ConversionDomain::Pressure,
    ];

    /// Parse from a domain code string
    pub fn parse(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().as_str() {
            "length" => Ok(ConversionDomain::Length),
            "weight" => Ok(ConversionDomain::Weight),
            "area" => Ok(ConversionDomain::Area),
            "volume" => Ok(ConversionDomain::Volume),
            "pressure" => Ok(ConversionDomain::Pressure),
            _ => Err(CalcError::unknown_unit(s, "domain")),
        }
    }

    /// Get the domain code string
    pub fn code(&self) -> &'static str {
        match self {
            ConversionDomain::Length => "length",
            ConversionDomain::Weight => "weight",
            ConversionDomain::Area => "area",
            ConversionDomain::Volume => "volume",
            ConversionDomain::Pressure => "pressure",
        }
    }

    /// Canonical unit code for this domain
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            ConversionDomain::Length => "m",
            ConversionDomain::Weight => "kg",
            ConversionDomain::Area => "sqm",
            ConversionDomain::Volume => "cum",
            ConversionDomain::Pressure => "nmm2",
        }
    }

    /// Valid unit codes for this domain
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            ConversionDomain::Length => &["m", "ft", "mm", "cm", "km"],
            ConversionDomain::Weight => &["kg", "ton", "g", "lb"],
            ConversionDomain::Area => &["sqm", "sqft", "acre", "hectare"],
            ConversionDomain::Volume => &["cum", "cuft", "liter"],
            ConversionDomain::Pressure => &["nmm2", "psi", "mpa", "bar"],
        }
    }

    /// Multiplier taking one of `unit` to the canonical unit.
    ///
    /// `value * factor` is the value expressed in the canonical unit.
    fn canonical_factor(&self, unit: &str) -> CalcResult<f64> {
        let factor = match (self, unit) {
            (ConversionDomain::Length, "m") => 1.0,
            (ConversionDomain::Length, "ft") => 1.0 / FEET_PER_METER,
            (ConversionDomain::Length, "mm") => 1.0 / 1000.0,
            (ConversionDomain::Length, "cm") => 1.0 / 100.0,
            (ConversionDomain::Length, "km") => 1000.0,

            (ConversionDomain::Weight, "kg") => 1.0,
            (ConversionDomain::Weight, "ton") => 1000.0,
            (ConversionDomain::Weight, "g") => 1.0 / 1000.0,
            (ConversionDomain::Weight, "lb") => 1.0 / LB_PER_KG,

            (ConversionDomain::Area, "sqm") => 1.0,
            (ConversionDomain::Area, "sqft") => 1.0 / SQFT_PER_SQM,
            (ConversionDomain::Area, "acre") => SQM_PER_ACRE,
            (ConversionDomain::Area, "hectare") => 10_000.0,

            (ConversionDomain::Volume, "cum") => 1.0,
            (ConversionDomain::Volume, "cuft") => 1.0 / FT3_PER_M3,
            (ConversionDomain::Volume, "liter") => 1.0 / 1000.0,

            (ConversionDomain::Pressure, "nmm2") => 1.0,
            (ConversionDomain::Pressure, "psi") => 1.0 / PSI_PER_NMM2,
            (ConversionDomain::Pressure, "mpa") => 1.0,
            (ConversionDomain::Pressure, "bar") => 1.0 / 10.0,

            _ => return Err(CalcError::unknown_unit(unit, self.code())),
        };
        Ok(factor)
    }
}

impl std::fmt::Display for ConversionDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Convert a value between two units of the same domain.
///
/// Two-stage conversion: source unit to the domain's canonical unit, then
/// canonical unit to the target unit.
///
/// # Errors
///
/// Returns [`CalcError::UnknownUnit`] if either unit code is not valid
/// for the domain.
pub fn convert(value: f64, domain: ConversionDomain, from: &str, to: &str) -> CalcResult<f64> {
    let canonical = value * domain.canonical_factor(from)?;
    Ok(canonical / domain.canonical_factor(to)?)
}

/// A unit conversion request.
///
/// ## JSON Example
///
/// ```json
/// { "value": 1.0, "domain": "length", "from_unit": "m", "to_unit": "ft" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub domain: ConversionDomain,
    pub from_unit: String,
    pub to_unit: String,
}

/// Result of a unit conversion, echoing the request for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Value as entered
    pub original_value: f64,
    pub from_unit: String,
    /// Converted value, rounded to 6 decimals
    pub result_value: f64,
    pub to_unit: String,
    pub domain: ConversionDomain,
}

/// Convert a request into a full result record.
pub fn convert_units(request: &ConversionRequest) -> CalcResult<ConversionResult> {
    let raw = convert(
        request.value,
        request.domain,
        &request.from_unit,
        &request.to_unit,
    )
    .inspect_err(|e| log::error!("Unit conversion error: {}", e))?;

    Ok(ConversionResult {
        original_value: request.value,
        from_unit: request.from_unit.clone(),
        result_value: crate::calculations::round_to(raw, 6),
        to_unit: request.to_unit.clone(),
        domain: request.domain,
    })
}

/// Measurement system for calculator inputs that accept metric or imperial
/// lengths (concrete mix volume, steel bar length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputUnit {
    Meters,
    Feet,
}

impl InputUnit {
    /// Parse from the request string ("meters" or "feet")
    pub fn parse(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().as_str() {
            "meters" => Ok(InputUnit::Meters),
            "feet" => Ok(InputUnit::Feet),
            _ => Err(CalcError::unknown_unit(s, "input unit")),
        }
    }

    /// Convert a linear measurement to meters
    pub fn length_to_m(&self, length: f64) -> f64 {
        match self {
            InputUnit::Meters => length,
            InputUnit::Feet => length / FEET_PER_METER,
        }
    }

    /// Convert a volume to cubic meters.
    ///
    /// For feet input the linear factor must be cubed (cubic feet to cubic
    /// meters), not applied once.
    pub fn volume_to_m3(&self, volume: f64) -> f64 {
        match self {
            InputUnit::Meters => volume,
            InputUnit::Feet => volume / FEET_PER_METER.powi(3),
        }
    }
}

impl std::fmt::Display for InputUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputUnit::Meters => write!(f, "meters"),
            InputUnit::Feet => write!(f, "feet"),
        }
    }
}
