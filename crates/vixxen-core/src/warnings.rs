//! Loading warnings
//!
//! Advisory checks over a resolved loading and fuel plan. Every check runs on
//! every call; all violations are reported together, in a fixed order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuel::FuelPlanResult;
use crate::limits::{CG_MAX_M, CG_MIN_M, MAX_BAGGAGE_KG, MAX_FUEL_LITERS, MTOW_KG};
use crate::weight_balance::{LoadInputs, WeightBalanceResult};

/// A limit the current loading violates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Warning {
    /// Takeoff weight above MTOW
    OverMaxTakeoffWeight,
    /// CG forward or aft of the envelope
    CgOutOfLimits,
    /// Baggage above the compartment limit
    BaggageOverMaximum,
    /// Fuel above tank capacity
    FuelOverMaximum,
    /// Planned fuel does not fit in the tanks
    InsufficientFuel,
}

impl Warning {
    /// Text shown to the pilot
    pub fn message(&self) -> &'static str {
        match self {
            Warning::OverMaxTakeoffWeight => "TOGW exceeds MTOW",
            Warning::CgOutOfLimits => "CG out of limits",
            Warning::BaggageOverMaximum => "Baggage exceeds maximum",
            Warning::FuelOverMaximum => "Fuel exceeds maximum",
            Warning::InsufficientFuel => "Insufficient fuel for planned flight",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate all loading checks
///
/// A non-finite CG compares false against both limits and raises no CG warning.
pub fn evaluate(
    load: &LoadInputs,
    weight_balance: &WeightBalanceResult,
    fuel: &FuelPlanResult,
) -> Vec<Warning> {
    let cg = weight_balance.center_of_gravity;
    let checks = [
        (weight_balance.takeoff_weight > MTOW_KG, Warning::OverMaxTakeoffWeight),
        (cg < CG_MIN_M || cg > CG_MAX_M, Warning::CgOutOfLimits),
        (load.baggage_weight > MAX_BAGGAGE_KG, Warning::BaggageOverMaximum),
        (load.fuel_liters > MAX_FUEL_LITERS, Warning::FuelOverMaximum),
        (fuel.remaining_fuel < 0.0, Warning::InsufficientFuel),
    ];

    let warnings: Vec<Warning> = checks
        .into_iter()
        .filter_map(|(violated, warning)| violated.then_some(warning))
        .collect();

    for warning in &warnings {
        tracing::warn!("Loading check failed: {warning}");
    }

    warnings
}
