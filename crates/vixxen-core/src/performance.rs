//! Runway Performance
//!
//! Derates flight-manual (POH) takeoff and landing distances with
//! multiplicative safety factors for:
//! - Aircraft weight bracket (base factor)
//! - Temperature above ISA and pressure-altitude increase
//! - Tailwind component
//! - Runway slope (uphill for takeoff, downhill for landing)
//! - Approach speed excess and braking technique (landing only)
//! - Runway surface
//!
//! Factors are applied in a fixed order and recorded in an audit list.
//! Excess threshold height is an additive distance, not a factor.

use serde::{Deserialize, Serialize};

use crate::limits::MTOW_KG;

/// Liftoff speed used to express tailwind as a percentage (kts)
const LIFTOFF_SPEED_KTS: f64 = 65.0;

/// Touchdown speed used to express tailwind as a percentage (kts)
const LANDING_SPEED_KTS: f64 = 80.0;

/// Landing distance added per 10 ft of excess threshold height (m)
const THRESHOLD_ADDITION_PER_10FT_M: f64 = 61.0;

/// Runway surface condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceType {
    /// Dry sealed runway, no penalty
    #[default]
    SealedDry,
    /// Wet sealed runway
    WetSealed,
    /// Dry grass up to 20 cm
    DryGrass,
    /// Wet grass up to 20 cm
    WetGrass,
    /// Short, dense or very green grass
    DenseGrass,
    /// Soft ground or snow
    SoftSnow,
    /// Mud or light snow
    MuddySnow,
    /// 20-50 mm of standing water
    StandingWater,
}

impl SurfaceType {
    /// All surfaces, in selector order
    pub const ALL: [SurfaceType; 8] = [
        SurfaceType::SealedDry,
        SurfaceType::WetSealed,
        SurfaceType::DryGrass,
        SurfaceType::WetGrass,
        SurfaceType::DenseGrass,
        SurfaceType::SoftSnow,
        SurfaceType::MuddySnow,
        SurfaceType::StandingWater,
    ];

    /// Human-readable name, also used as the audit label
    pub fn label(&self) -> &'static str {
        match self {
            SurfaceType::SealedDry => "Sealed Dry",
            SurfaceType::WetSealed => "Wet Sealed Surface",
            SurfaceType::DryGrass => "Dry Grass (up to 20cm)",
            SurfaceType::WetGrass => "Wet Grass (up to 20cm)",
            SurfaceType::DenseGrass => "Short & Dense/Very Green Grass",
            SurfaceType::SoftSnow => "Soft Ground/Snow",
            SurfaceType::MuddySnow => "Muddy/Light Snow",
            SurfaceType::StandingWater => "Standing Water (20-50mm)",
        }
    }

    /// Takeoff penalty, if this surface has one
    pub fn takeoff_factor(&self) -> Option<f64> {
        match self {
            SurfaceType::SoftSnow => Some(1.25),
            SurfaceType::DryGrass => Some(1.2),
            SurfaceType::WetGrass => Some(1.3),
            _ => None,
        }
    }

    /// Landing penalty, if this surface has one
    pub fn landing_factor(&self) -> Option<f64> {
        match self {
            SurfaceType::WetSealed => Some(1.15),
            SurfaceType::MuddySnow => Some(1.25),
            SurfaceType::DryGrass => Some(1.2),
            SurfaceType::WetGrass => Some(1.3),
            SurfaceType::DenseGrass => Some(1.6),
            SurfaceType::StandingWater => Some(1.5),
            _ => None,
        }
    }
}

/// Runway and environmental conditions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceInputs {
    /// POH takeoff distance to 50 ft (m)
    pub poh_takeoff_distance: f64,
    /// POH landing distance from 50 ft (m)
    pub poh_landing_distance: f64,
    /// Positive uphill, negative downhill (%)
    pub runway_slope_percent: f64,
    /// Runway surface condition
    pub surface_type: SurfaceType,
    /// Temperature above ISA (°C)
    pub temp_above_isa_c: f64,
    /// Pressure-altitude increase over the POH figure (ft)
    pub elevation_increase_ft: f64,
    /// Tailwind component (kts)
    pub tailwind_kts: f64,
    /// Approach speed above the POH figure (kts)
    pub approach_speed_excess_kts: f64,
    /// Threshold crossing height above 50 ft (ft)
    pub threshold_height_excess_ft: f64,
    /// Landing without continuous maximum braking
    pub no_continuous_max_braking: bool,
}

impl Default for PerformanceInputs {
    fn default() -> Self {
        Self {
            poh_takeoff_distance: 319.0,
            poh_landing_distance: 404.0,
            runway_slope_percent: 0.0,
            surface_type: SurfaceType::SealedDry,
            temp_above_isa_c: 0.0,
            elevation_increase_ft: 0.0,
            tailwind_kts: 0.0,
            approach_speed_excess_kts: 0.0,
            threshold_height_excess_ft: 0.0,
            no_continuous_max_braking: false,
        }
    }
}

/// One entry of the factor audit list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFactor {
    /// What the factor accounts for
    pub label: String,
    /// Multiplier applied to the running factor
    pub factor: f64,
}

/// Derated distances and the factors that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResult {
    /// Total takeoff safety factor
    pub takeoff_factor: f64,
    /// Total landing safety factor
    pub landing_factor: f64,
    /// Takeoff factors in evaluation order, base factor first
    pub applied_takeoff_factors: Vec<AppliedFactor>,
    /// Landing factors in evaluation order, base factor first
    pub applied_landing_factors: Vec<AppliedFactor>,
    /// POH takeoff distance × takeoff factor (m)
    pub required_takeoff_distance: f64,
    /// POH landing distance × landing factor + threshold addition (m)
    pub required_landing_distance: f64,
    /// Additive landing distance for excess threshold height (m)
    pub threshold_addition: f64,
}

impl PerformanceResult {
    /// Required takeoff distance rounded up to the next metre
    pub fn takeoff_distance_rounded(&self) -> f64 {
        self.required_takeoff_distance.ceil()
    }

    /// Required landing distance rounded up to the next metre
    pub fn landing_distance_rounded(&self) -> f64 {
        self.required_landing_distance.ceil()
    }
}

/// Base takeoff factor for an aircraft mass (kg)
///
/// 1.15 up to 2000 kg, rising linearly to 1.25 at 3500 kg.
pub fn takeoff_base_factor(mtow: f64) -> f64 {
    if mtow <= 2000.0 {
        1.15
    } else if mtow <= 3500.0 {
        1.15 + ((mtow - 2000.0) / 1500.0) * 0.10
    } else {
        1.25
    }
}

/// Base landing factor for an aircraft mass (kg)
///
/// 1.15 up to 2000 kg, rising linearly to 1.43 at 4500 kg.
pub fn landing_base_factor(mtow: f64) -> f64 {
    if mtow <= 2000.0 {
        1.15
    } else if mtow <= 4500.0 {
        1.15 + ((mtow - 2000.0) / 2500.0) * 0.28
    } else {
        1.43
    }
}

/// Running product of factors plus its audit trail
struct FactorChain {
    product: f64,
    applied: Vec<AppliedFactor>,
}

impl FactorChain {
    fn new(base: f64) -> Self {
        Self {
            product: base,
            applied: vec![AppliedFactor {
                label: "Base Safety Factor".to_string(),
                factor: base,
            }],
        }
    }

    fn apply(&mut self, label: String, factor: f64) {
        tracing::trace!("Applying {label}: x{factor:.3}");
        self.product *= factor;
        self.applied.push(AppliedFactor { label, factor });
    }
}

/// `base` raised to the number of started `step`s in `amount`
fn stepped(base: f64, amount: f64, step: f64) -> f64 {
    base.powf((amount / step).ceil())
}

/// Derate POH distances for the given conditions
pub fn derate(inputs: &PerformanceInputs) -> PerformanceResult {
    let temp = inputs.temp_above_isa_c;
    let elevation = inputs.elevation_increase_ft;
    let tailwind = inputs.tailwind_kts;
    let slope = inputs.runway_slope_percent;

    let mut takeoff = FactorChain::new(takeoff_base_factor(MTOW_KG));
    if temp > 0.0 {
        takeoff.apply(format!("Temperature +{temp}°C above ISA"), stepped(1.1, temp, 10.0));
    }
    if elevation > 0.0 {
        takeoff.apply(format!("Elevation +{elevation}ft"), stepped(1.1, elevation, 1000.0));
    }
    if tailwind > 0.0 {
        let percent = tailwind / LIFTOFF_SPEED_KTS * 100.0;
        takeoff.apply(format!("Tailwind {tailwind}kts"), stepped(1.2, percent, 10.0));
    }
    if slope > 0.0 {
        takeoff.apply(format!("Uphill slope {slope}%"), stepped(1.1, slope, 2.0));
    }
    if let Some(factor) = inputs.surface_type.takeoff_factor() {
        takeoff.apply(inputs.surface_type.label().to_string(), factor);
    }

    let mut landing = FactorChain::new(landing_base_factor(MTOW_KG));
    if temp > 0.0 {
        landing.apply(format!("Temperature +{temp}°C above ISA"), stepped(1.05, temp, 10.0));
    }
    if elevation > 0.0 {
        landing.apply(format!("Elevation +{elevation}ft"), stepped(1.05, elevation, 1000.0));
    }
    if tailwind > 0.0 {
        let percent = tailwind / LANDING_SPEED_KTS * 100.0;
        landing.apply(format!("Tailwind {tailwind}kts"), stepped(1.2, percent, 10.0));
    }
    if slope < 0.0 {
        // One step per whole percent, unlike the 2% takeoff step
        let downhill = slope.abs();
        landing.apply(format!("Downhill slope {downhill}%"), stepped(1.1, downhill, 1.0));
    }
    if inputs.approach_speed_excess_kts > 0.0 {
        let excess = inputs.approach_speed_excess_kts;
        landing.apply(format!("Approach speed +{excess}kts"), stepped(1.2, excess, 10.0));
    }
    if inputs.no_continuous_max_braking {
        landing.apply("No continuous max braking".to_string(), 1.2);
    }
    if let Some(factor) = inputs.surface_type.landing_factor() {
        landing.apply(inputs.surface_type.label().to_string(), factor);
    }

    let threshold_addition = if inputs.threshold_height_excess_ft > 0.0 {
        (inputs.threshold_height_excess_ft / 10.0).ceil() * THRESHOLD_ADDITION_PER_10FT_M
    } else {
        0.0
    };

    let required_takeoff_distance = inputs.poh_takeoff_distance * takeoff.product;
    let required_landing_distance =
        inputs.poh_landing_distance * landing.product + threshold_addition;

    tracing::debug!(
        "Performance: takeoff x{:.2} = {:.0} m, landing x{:.2} + {:.0} m = {:.0} m",
        takeoff.product,
        required_takeoff_distance,
        landing.product,
        threshold_addition,
        required_landing_distance
    );

    PerformanceResult {
        takeoff_factor: takeoff.product,
        landing_factor: landing.product,
        applied_takeoff_factors: takeoff.applied,
        applied_landing_factors: landing.applied,
        required_takeoff_distance,
        required_landing_distance,
        threshold_addition,
    }
}
