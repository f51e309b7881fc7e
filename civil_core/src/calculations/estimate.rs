//! # Material Quantity and Cost Estimation (BOQ)
//!
//! Two estimators:
//!
//! - [`estimate_quantities`] - full bill of quantities for a rectangular
//!   RCC room/building: concrete, brickwork, and itemized costs with a
//!   fixed 40% labor surcharge.
//! - [`estimate_by_type`] - simpler per-m² estimator keyed by construction
//!   type (brick wall, slab, plaster, flooring, foundation).
//!
//! All coefficients are compiled-in constants calibrated to a nominal mix;
//! unit rates for cement, sand, aggregate, and steel are supplied by the
//! caller. Currency is presentation metadata and not modeled here.

use serde::{Deserialize, Serialize};

use crate::calculations::round_to;
use crate::errors::{CalcError, CalcResult};

/// Slab thickness assumed for the RCC structure (m)
const SLAB_THICKNESS_M: f64 = 0.15;
/// Beam volume as a fraction of floor area
const BEAM_VOLUME_RATIO: f64 = 0.03;
/// Column volume as a fraction of floor area
const COLUMN_VOLUME_RATIO: f64 = 0.02;
/// Footing volume as a fraction of floor area
const FOOTING_VOLUME_RATIO: f64 = 0.05;

/// Cement bags (50 kg) per m³ of concrete, nominal M25 mix
const CEMENT_BAGS_PER_M3: f64 = 8.5;
/// Sand volume per m³ of concrete
const SAND_PER_M3: f64 = 0.45;
/// Aggregate volume per m³ of concrete
const AGGREGATE_PER_M3: f64 = 0.9;
/// Reinforcement steel per m³ of concrete (kg), typical residential
const STEEL_KG_PER_M3: f64 = 80.0;

/// Brick wall thickness (m)
const WALL_THICKNESS_M: f64 = 0.23;
/// Bricks per m³ of brickwork
const BRICKS_PER_M3: f64 = 500.0;
/// Mortar fraction of brickwork volume
const MORTAR_RATIO: f64 = 0.3;
/// Cement bags per m³ of mortar
const MORTAR_CEMENT_BAGS_PER_M3: f64 = 5.5;
/// Sand volume per m³ of mortar
const MORTAR_SAND_PER_M3: f64 = 1.0;

/// Fixed per-brick cost
const BRICK_UNIT_COST: f64 = 8.0;
/// Labor surcharge over total material cost
const LABOR_COST_RATIO: f64 = 0.4;

/// Mixing water per cement bag (liters), used by the by-type estimator
const WATER_LITERS_PER_BAG: f64 = 25.0;

/// Input for the full quantity/cost estimator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_m": 5.0,
///   "width_m": 4.0,
///   "height_m": 3.0,
///   "cement_rate": 450.0,
///   "sand_rate": 1500.0,
///   "aggregate_rate": 1200.0,
///   "steel_rate": 60.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityInput {
    /// Room/building length (m)
    pub length_m: f64,
    /// Room/building width (m)
    pub width_m: f64,
    /// Wall height (m)
    pub height_m: f64,

    /// Cement rate per 50 kg bag
    pub cement_rate: f64,
    /// Sand rate per m³
    pub sand_rate: f64,
    /// Aggregate rate per m³
    pub aggregate_rate: f64,
    /// Steel rate per kg
    pub steel_rate: f64,
}

impl QuantityInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("length_m", self.length_m),
            ("width_m", self.width_m),
            ("height_m", self.height_m),
        ] {
            if value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Echoed dimensions with derived areas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    /// Floor area L x W (m²), 2 decimals
    pub floor_area_m2: f64,
    /// Wall area 2(L+W) x H (m²), 2 decimals
    pub wall_area_m2: f64,
}

/// Concrete material quantities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcreteQuantities {
    /// Total concrete volume: slab + beam/column/footing allowances (m³)
    pub volume_m3: f64,
    /// Cement bags including brickwork mortar share
    pub cement_bags: f64,
    /// Sand volume including brickwork mortar share (m³)
    pub sand_volume_m3: f64,
    /// Coarse aggregate volume (m³)
    pub aggregate_volume_m3: f64,
    /// Reinforcement steel (kg)
    pub steel_weight_kg: f64,
}

/// Brickwork quantities for 230 mm walls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickworkQuantities {
    pub brick_volume_m3: f64,
    pub bricks_required: f64,
    pub mortar_volume_m3: f64,
}

/// Itemized costs. Total = material cost + 40% labor surcharge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub cement_cost: f64,
    pub sand_cost: f64,
    pub aggregate_cost: f64,
    pub steel_cost: f64,
    pub brick_cost: f64,
    pub total_material_cost: f64,
    pub labor_cost: f64,
    pub total_cost: f64,
}

/// Full estimation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityEstimate {
    pub dimensions: Dimensions,
    pub concrete: ConcreteQuantities,
    pub brickwork: BrickworkQuantities,
    pub costs: CostBreakdown,
}

/// Estimate material quantities and costs for a rectangular RCC structure.
///
/// # Errors
///
/// * [`CalcError::InvalidInput`] if any dimension is not positive
pub fn estimate_quantities(input: &QuantityInput) -> CalcResult<QuantityEstimate> {
    input.validate().inspect_err(|e| {
        log::error!("Material estimation error: {}", e);
    })?;

    let floor_area = input.length_m * input.width_m;
    let wall_area = 2.0 * (input.length_m + input.width_m) * input.height_m;

    // Concrete volume: slab plus fractional allowances for beams, columns,
    // and footings
    let total_concrete = floor_area * SLAB_THICKNESS_M
        + floor_area * (BEAM_VOLUME_RATIO + COLUMN_VOLUME_RATIO + FOOTING_VOLUME_RATIO);

    let cement_bags = total_concrete * CEMENT_BAGS_PER_M3;
    let sand_volume = total_concrete * SAND_PER_M3;
    let aggregate_volume = total_concrete * AGGREGATE_PER_M3;
    let steel_weight = total_concrete * STEEL_KG_PER_M3;

    // Brickwork for 230 mm walls
    let brick_volume = wall_area * WALL_THICKNESS_M;
    let bricks_required = brick_volume * BRICKS_PER_M3;
    let mortar_volume = brick_volume * MORTAR_RATIO;
    let cement_bags_brickwork = mortar_volume * MORTAR_CEMENT_BAGS_PER_M3;
    let sand_brickwork = mortar_volume * MORTAR_SAND_PER_M3;

    let total_cement_bags = cement_bags + cement_bags_brickwork;
    let total_sand_volume = sand_volume + sand_brickwork;

    // Costs from unrounded quantities
    let cement_cost = total_cement_bags * input.cement_rate;
    let sand_cost = total_sand_volume * input.sand_rate;
    let aggregate_cost = aggregate_volume * input.aggregate_rate;
    let steel_cost = steel_weight * input.steel_rate;
    let brick_cost = bricks_required * BRICK_UNIT_COST;

    let total_material_cost = cement_cost + sand_cost + aggregate_cost + steel_cost + brick_cost;
    let labor_cost = total_material_cost * LABOR_COST_RATIO;
    let total_cost = total_material_cost + labor_cost;

    Ok(QuantityEstimate {
        dimensions: Dimensions {
            length_m: input.length_m,
            width_m: input.width_m,
            height_m: input.height_m,
            floor_area_m2: round_to(floor_area, 2),
            wall_area_m2: round_to(wall_area, 2),
        },
        concrete: ConcreteQuantities {
            volume_m3: round_to(total_concrete, 3),
            cement_bags: round_to(total_cement_bags, 1),
            sand_volume_m3: round_to(total_sand_volume, 2),
            aggregate_volume_m3: round_to(aggregate_volume, 2),
            steel_weight_kg: round_to(steel_weight, 2),
        },
        brickwork: BrickworkQuantities {
            brick_volume_m3: round_to(brick_volume, 3),
            bricks_required: round_to(bricks_required, 0),
            mortar_volume_m3: round_to(mortar_volume, 3),
        },
        costs: CostBreakdown {
            cement_cost: round_to(cement_cost, 2),
            sand_cost: round_to(sand_cost, 2),
            aggregate_cost: round_to(aggregate_cost, 2),
            steel_cost: round_to(steel_cost, 2),
            brick_cost: round_to(brick_cost, 2),
            total_material_cost: round_to(total_material_cost, 2),
            labor_cost: round_to(labor_cost, 2),
            total_cost: round_to(total_cost, 2),
        },
    })
}

/// Construction types supported by the simplified per-area estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionType {
    BrickWall,
    ConcreteSlab,
    Plaster,
    Flooring,
    Foundation,
}

impl ConstructionType {
    /// All construction types for UI selection
    pub const ALL: [ConstructionType; 5] = [
        ConstructionType::BrickWall,
        ConstructionType::ConcreteSlab,
        ConstructionType::Plaster,
        ConstructionType::Flooring,
        ConstructionType::Foundation,
    ];

    /// Parse from a type code string
    pub fn parse(s: &str) -> CalcResult<Self> {
        match s.to_lowercase().as_str() {
            "brick_wall" => Ok(ConstructionType::BrickWall),
            "concrete_slab" => Ok(ConstructionType::ConcreteSlab),
            "plaster" => Ok(ConstructionType::Plaster),
            "flooring" => Ok(ConstructionType::Flooring),
            "foundation" => Ok(ConstructionType::Foundation),
            _ => Err(CalcError::unknown_construction_type(s)),
        }
    }

    /// Human-readable description including the assumed geometry
    pub fn description(&self) -> &'static str {
        match self {
            ConstructionType::BrickWall => "Brick Wall (9 inch)",
            ConstructionType::ConcreteSlab => "RCC Slab (6 inch)",
            ConstructionType::Plaster => "Plastering (12mm thick)",
            ConstructionType::Flooring => "Tile Flooring",
            ConstructionType::Foundation => "Strip Foundation (1m deep, 0.5m wide)",
        }
    }
}

impl std::fmt::Display for ConstructionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A single material line item in a by-type estimate.
///
/// Quantities are unrounded; precision is a presentation decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialItem {
    pub material: String,
    pub quantity: f64,
    pub unit: String,
}

impl MaterialItem {
    fn new(material: &str, quantity: f64, unit: &str) -> Self {
        MaterialItem {
            material: material.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }
}

/// Result of the simplified per-area estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEstimate {
    pub construction_type: ConstructionType,
    pub description: String,
    /// Input area in m² (length in m for strip foundations)
    pub area_m2: f64,
    pub materials: Vec<MaterialItem>,
}

impl TypeEstimate {
    /// Find a line item by material name
    pub fn item(&self, material: &str) -> Option<&MaterialItem> {
        self.materials.iter().find(|m| m.material == material)
    }
}

/// Estimate materials for a construction type from its area.
///
/// For strip foundations the `area_m2` argument is interpreted as the run
/// length in meters.
///
/// # Errors
///
/// * [`CalcError::InvalidInput`] if the area is not positive
pub fn estimate_by_type(
    area_m2: f64,
    construction_type: ConstructionType,
) -> CalcResult<TypeEstimate> {
    if area_m2 <= 0.0 {
        let err = CalcError::invalid_input(
            "area_m2",
            area_m2.to_string(),
            "Area must be positive",
        );
        log::error!("Material estimation error: {}", err);
        return Err(err);
    }

    let materials = match construction_type {
        ConstructionType::BrickWall => {
            let bricks = area_m2 * 120.0;
            let cement_bags = area_m2 * 0.3;
            let sand_m3 = area_m2 * 0.05;
            vec![
                MaterialItem::new("Bricks", bricks, "nos"),
                MaterialItem::new("Cement", cement_bags, "bags (50kg each)"),
                MaterialItem::new("Sand", sand_m3, "m3"),
                MaterialItem::new("Water", cement_bags * WATER_LITERS_PER_BAG, "liters"),
            ]
        }
        ConstructionType::ConcreteSlab => {
            let concrete_m3 = area_m2 * 0.152;
            let cement_bags = concrete_m3 * 7.0;
            vec![
                MaterialItem::new("Concrete Volume", concrete_m3, "m3"),
                MaterialItem::new("Cement", cement_bags, "bags (50kg each)"),
                MaterialItem::new("Sand", concrete_m3 * 0.42, "m3"),
                MaterialItem::new("Aggregate (20mm)", concrete_m3 * 0.84, "m3"),
                MaterialItem::new("Steel Reinforcement", area_m2 * 12.0, "kg"),
                MaterialItem::new("Water", cement_bags * WATER_LITERS_PER_BAG, "liters"),
            ]
        }
        ConstructionType::Plaster => {
            let cement_bags = area_m2 * 0.18;
            vec![
                MaterialItem::new("Cement", cement_bags, "bags (50kg each)"),
                MaterialItem::new("Sand", area_m2 * 0.015, "m3"),
                MaterialItem::new("Water", cement_bags * WATER_LITERS_PER_BAG, "liters"),
            ]
        }
        ConstructionType::Flooring => {
            let cement_bags = area_m2 * 0.25;
            vec![
                // 5% extra tiles for wastage
                MaterialItem::new("Tiles", area_m2 * 1.05, "m2"),
                MaterialItem::new("Cement", cement_bags, "bags (50kg each)"),
                MaterialItem::new("Sand", area_m2 * 0.02, "m3"),
                MaterialItem::new("Tile Adhesive", area_m2 * 5.0, "kg"),
                MaterialItem::new("Water", cement_bags * WATER_LITERS_PER_BAG, "liters"),
            ]
        }
        ConstructionType::Foundation => {
            // 1 m deep, 0.5 m wide strip; area input is the run length
            let concrete_m3 = area_m2 * 1.0 * 0.5;
            let cement_bags = concrete_m3 * 6.5;
            vec![
                MaterialItem::new("Concrete Volume", concrete_m3, "m3"),
                MaterialItem::new("Cement", cement_bags, "bags (50kg each)"),
                MaterialItem::new("Sand", concrete_m3 * 0.45, "m3"),
                MaterialItem::new("Aggregate (20mm)", concrete_m3 * 0.9, "m3"),
                MaterialItem::new("Steel Reinforcement", concrete_m3 * 60.0, "kg"),
                MaterialItem::new("Water", cement_bags * WATER_LITERS_PER_BAG, "liters"),
                MaterialItem::new("Excavation Volume", concrete_m3, "m3"),
            ]
        }
    };

    Ok(TypeEstimate {
        construction_type,
        description: construction_type.description().to_string(),
        area_m2,
        materials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> QuantityInput {
        QuantityInput {
            length_m: 5.0,
            width_m: 4.0,
            height_m: 3.0,
            cement_rate: 450.0,
            sand_rate: 1500.0,
            aggregate_rate: 1200.0,
            steel_rate: 60.0,
        }
    }

    #[test]
    fn test_areas() {
        let estimate = estimate_quantities(&test_input()).unwrap();
        assert_eq!(estimate.dimensions.floor_area_m2, 20.0);
        assert_eq!(estimate.dimensions.wall_area_m2, 54.0);
    }

    #[test]
    fn test_concrete_quantities() {
        let estimate = estimate_quantities(&test_input()).unwrap();
        // 20 * 0.15 slab + 20 * 0.10 allowances = 5.0 m³
        assert_eq!(estimate.concrete.volume_m3, 5.0);
        // 5 * 8.5 + mortar share 3.726 * 5.5 = 62.993 -> 63.0
        assert_eq!(estimate.concrete.cement_bags, 63.0);
        // 5 * 0.45 + 3.726 = 5.976 -> 5.98
        assert_eq!(estimate.concrete.sand_volume_m3, 5.98);
        assert_eq!(estimate.concrete.aggregate_volume_m3, 4.5);
        assert_eq!(estimate.concrete.steel_weight_kg, 400.0);
    }

    #[test]
    fn test_brickwork_quantities() {
        let estimate = estimate_quantities(&test_input()).unwrap();
        // 54 * 0.23 = 12.42 m³, 500 bricks/m³, 30% mortar
        assert_eq!(estimate.brickwork.brick_volume_m3, 12.42);
        assert_eq!(estimate.brickwork.bricks_required, 6210.0);
        assert_eq!(estimate.brickwork.mortar_volume_m3, 3.726);
    }

    #[test]
    fn test_costs() {
        let estimate = estimate_quantities(&test_input()).unwrap();
        assert_eq!(estimate.costs.cement_cost, 28346.85);
        assert_eq!(estimate.costs.sand_cost, 8964.0);
        assert_eq!(estimate.costs.aggregate_cost, 5400.0);
        assert_eq!(estimate.costs.steel_cost, 24000.0);
        assert_eq!(estimate.costs.brick_cost, 49680.0);
        assert_eq!(estimate.costs.total_material_cost, 116390.85);
        assert_eq!(estimate.costs.labor_cost, 46556.34);
        assert_eq!(estimate.costs.total_cost, 162947.19);
    }

    #[test]
    fn test_total_is_material_plus_40_percent() {
        let estimate = estimate_quantities(&test_input()).unwrap();
        let expected = estimate.costs.total_material_cost * 1.4;
        assert!((estimate.costs.total_cost - expected).abs() < 0.02);
    }

    #[test]
    fn test_invalid_dimension() {
        let input = QuantityInput {
            height_m: 0.0,
            ..test_input()
        };
        let err = estimate_quantities(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_brick_wall_estimate() {
        let estimate = estimate_by_type(10.0, ConstructionType::BrickWall).unwrap();
        assert_eq!(estimate.item("Bricks").unwrap().quantity, 1200.0);
        assert_eq!(estimate.item("Cement").unwrap().quantity, 3.0);
        assert_eq!(estimate.item("Sand").unwrap().quantity, 0.5);
        assert_eq!(estimate.item("Water").unwrap().quantity, 75.0);
    }

    #[test]
    fn test_concrete_slab_estimate() {
        let estimate = estimate_by_type(10.0, ConstructionType::ConcreteSlab).unwrap();
        let concrete = estimate.item("Concrete Volume").unwrap().quantity;
        assert!((concrete - 1.52).abs() < 1e-9);
        assert!((estimate.item("Cement").unwrap().quantity - 10.64).abs() < 1e-9);
        assert_eq!(estimate.item("Steel Reinforcement").unwrap().quantity, 120.0);
    }

    #[test]
    fn test_foundation_uses_length() {
        // 8 m run of 1 m x 0.5 m strip -> 4 m³ concrete, excavation matches
        let estimate = estimate_by_type(8.0, ConstructionType::Foundation).unwrap();
        assert_eq!(estimate.item("Concrete Volume").unwrap().quantity, 4.0);
        assert_eq!(estimate.item("Excavation Volume").unwrap().quantity, 4.0);
        assert_eq!(estimate.item("Steel Reinforcement").unwrap().quantity, 240.0);
    }

    #[test]
    fn test_unknown_construction_type() {
        let err = ConstructionType::parse("igloo").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CONSTRUCTION_TYPE");
    }

    #[test]
    fn test_construction_type_serde() {
        let t: ConstructionType = serde_json::from_str("\"brick_wall\"").unwrap();
        assert_eq!(t, ConstructionType::BrickWall);
    }

    #[test]
    fn test_by_type_invalid_area() {
        let err = estimate_by_type(-1.0, ConstructionType::Plaster).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_estimate_serialization() {
        let estimate = estimate_quantities(&test_input()).unwrap();
        let json = serde_json::to_string_pretty(&estimate).unwrap();
        assert!(json.contains("total_cost"));
        let roundtrip: QuantityEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(estimate.costs.total_cost, roundtrip.costs.total_cost);
    }
}
