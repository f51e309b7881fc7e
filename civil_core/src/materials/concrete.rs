//! Concrete Grades (IS 456 nominal mixes)
//!
//! Characteristic strength, density, and nominal mix proportions for the
//! standard concrete grades. All values are compiled-in constants.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Nominal mix proportion (cement : sand : aggregate) by volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixRatio {
    pub cement: f64,
    pub sand: f64,
    pub aggregate: f64,
}

impl MixRatio {
    /// Sum of all parts, the denominator for proportional shares
    pub fn total(&self) -> f64 {
        self.cement + self.sand + self.aggregate
    }
}

impl std::fmt::Display for MixRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.cement, self.sand, self.aggregate)
    }
}

/// Standard concrete grades.
///
/// The grade code is the characteristic compressive strength in N/mm²
/// (e.g., M20 is 20 N/mm² at 28 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M15,
    M20,
    M25,
    M30,
    M35,
}

impl ConcreteGrade {
    /// All concrete grade variants for UI selection
    pub const ALL: [ConcreteGrade; 5] = [
        ConcreteGrade::M15,
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
    ];

    /// Parse from a grade code string (case-insensitive)
    pub fn parse(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().as_str() {
            "M15" => Ok(ConcreteGrade::M15),
            "M20" => Ok(ConcreteGrade::M20),
            "M25" => Ok(ConcreteGrade::M25),
            "M30" => Ok(ConcreteGrade::M30),
            "M35" => Ok(ConcreteGrade::M35),
            _ => Err(CalcError::unknown_grade("concrete", s)),
        }
    }

    /// Grade code string (e.g., "M20")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::M15 => "M15",
            ConcreteGrade::M20 => "M20",
            ConcreteGrade::M25 => "M25",
            ConcreteGrade::M30 => "M30",
            ConcreteGrade::M35 => "M35",
        }
    }

    /// Characteristic compressive strength fck (N/mm²)
    pub fn fck_nmm2(&self) -> f64 {
        match self {
            ConcreteGrade::M15 => 15.0,
            ConcreteGrade::M20 => 20.0,
            ConcreteGrade::M25 => 25.0,
            ConcreteGrade::M30 => 30.0,
            ConcreteGrade::M35 => 35.0,
        }
    }

    /// Density (kg/m³)
    pub fn density_kg_m3(&self) -> f64 {
        match self {
            ConcreteGrade::M15 | ConcreteGrade::M20 => 2400.0,
            ConcreteGrade::M25 | ConcreteGrade::M30 | ConcreteGrade::M35 => 2500.0,
        }
    }

    /// Nominal mix proportion for this grade
    pub fn mix_ratio(&self) -> MixRatio {
        match self {
            ConcreteGrade::M15 => MixRatio { cement: 1.0, sand: 2.0, aggregate: 4.0 },
            ConcreteGrade::M20 => MixRatio { cement: 1.0, sand: 1.5, aggregate: 3.0 },
            ConcreteGrade::M25 => MixRatio { cement: 1.0, sand: 1.0, aggregate: 2.0 },
            ConcreteGrade::M30 => MixRatio { cement: 1.0, sand: 1.0, aggregate: 1.5 },
            ConcreteGrade::M35 => MixRatio { cement: 1.0, sand: 1.0, aggregate: 1.2 },
        }
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ConcreteGrade::parse("M20").unwrap(), ConcreteGrade::M20);
        assert_eq!(ConcreteGrade::parse("m35").unwrap(), ConcreteGrade::M35);
    }

    #[test]
    fn test_unknown_grade() {
        let err = ConcreteGrade::parse("M40").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_GRADE");
    }

    #[test]
    fn test_properties() {
        assert_eq!(ConcreteGrade::M25.fck_nmm2(), 25.0);
        assert_eq!(ConcreteGrade::M20.density_kg_m3(), 2400.0);
        assert_eq!(ConcreteGrade::M30.density_kg_m3(), 2500.0);
    }

    #[test]
    fn test_mix_ratio() {
        let ratio = ConcreteGrade::M20.mix_ratio();
        assert_eq!(ratio.cement, 1.0);
        assert_eq!(ratio.sand, 1.5);
        assert_eq!(ratio.aggregate, 3.0);
        assert_eq!(ratio.total(), 5.5);
        assert_eq!(ratio.to_string(), "1:1.5:3");
    }
}
