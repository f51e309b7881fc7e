//! Reinforcement Steel Grades (IS 1786)
//!
//! Yield strength and density for the standard rebar grades. The grade code
//! is the characteristic yield strength in N/mm².

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Density of reinforcement steel (kg/m³), common to all grades
pub const STEEL_DENSITY_KG_M3: f64 = 7850.0;

/// Standard reinforcement steel grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    Fe415,
    Fe500,
    Fe550,
}

impl SteelGrade {
    /// All steel grade variants for UI selection
    pub const ALL: [SteelGrade; 3] = [SteelGrade::Fe415, SteelGrade::Fe500, SteelGrade::Fe550];

    /// Parse from a grade code string (case-insensitive)
    pub fn parse(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().as_str() {
            "FE415" => Ok(SteelGrade::Fe415),
            "FE500" => Ok(SteelGrade::Fe500),
            "FE550" => Ok(SteelGrade::Fe550),
            _ => Err(CalcError::unknown_grade("steel", s)),
        }
    }

    /// Grade code string (e.g., "Fe415")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::Fe415 => "Fe415",
            SteelGrade::Fe500 => "Fe500",
            SteelGrade::Fe550 => "Fe550",
        }
    }

    /// Characteristic yield strength fy (N/mm²)
    pub fn fy_nmm2(&self) -> f64 {
        match self {
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
            SteelGrade::Fe550 => 550.0,
        }
    }

    /// Density (kg/m³)
    pub fn density_kg_m3(&self) -> f64 {
        STEEL_DENSITY_KG_M3
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(SteelGrade::parse("Fe415").unwrap(), SteelGrade::Fe415);
        assert_eq!(SteelGrade::parse("FE500").unwrap(), SteelGrade::Fe500);
        assert_eq!(SteelGrade::parse("fe550").unwrap(), SteelGrade::Fe550);
    }

    #[test]
    fn test_unknown_grade() {
        let err = SteelGrade::parse("Fe600").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_properties() {
        assert_eq!(SteelGrade::Fe415.fy_nmm2(), 415.0);
        assert_eq!(SteelGrade::Fe500.density_kg_m3(), 7850.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&SteelGrade::Fe415).unwrap();
        let grade: SteelGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(grade, SteelGrade::Fe415);
    }
}
