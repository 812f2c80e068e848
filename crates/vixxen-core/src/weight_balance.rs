//! Weight & Balance
//!
//! Resolves station moments, gross weights and center of gravity for one
//! loading of an airframe.

use serde::{Deserialize, Serialize};

use crate::catalog::AircraftProfile;
use crate::limits::{CG_MAX_M, CG_MIN_M, MTOW_KG};

/// Pilot-entered loading
///
/// Values are taken as given; limit violations are reported by
/// [`crate::warnings::evaluate`], never clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadInputs {
    /// Crew and passenger mass (kg)
    pub pax_weight: f64,
    /// Baggage mass (kg)
    pub baggage_weight: f64,
    /// Fuel on board (L)
    pub fuel_liters: f64,
}

impl Default for LoadInputs {
    fn default() -> Self {
        Self {
            pax_weight: 105.0,
            baggage_weight: 15.0,
            fuel_liters: 30.0,
        }
    }
}

/// Weights (kg), moments (kg·m) and CG (m) for a loading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightBalanceResult {
    /// Fuel mass (kg)
    pub fuel_weight: f64,
    /// Empty weight × empty arm
    pub empty_moment: f64,
    /// Crew mass × crew arm
    pub pax_moment: f64,
    /// Baggage mass × baggage arm
    pub baggage_moment: f64,
    /// Fuel mass × fuel arm
    pub fuel_moment: f64,
    /// Sum of the four station moments
    pub total_moment: f64,
    /// Empty weight + crew + baggage (kg)
    pub zero_fuel_weight: f64,
    /// Zero fuel weight + fuel (kg)
    pub takeoff_weight: f64,
    /// Center of gravity (m). Non-finite when the takeoff weight is zero.
    #[serde(with = "crate::non_finite")]
    pub center_of_gravity: f64,
    /// MTOW less empty weight and fuel (kg)
    pub max_payload: f64,
    /// Crew + baggage (kg)
    pub payload: f64,
    /// Max payload less payload; negative when overloaded (kg)
    pub payload_remaining: f64,
}

impl WeightBalanceResult {
    /// Center of gravity, or `None` when undefined
    pub fn cg(&self) -> Option<f64> {
        self.center_of_gravity
            .is_finite()
            .then_some(self.center_of_gravity)
    }

    /// Whether the CG lies inside the envelope (limits inclusive)
    pub fn cg_within_limits(&self) -> bool {
        self.cg()
            .is_some_and(|cg| (CG_MIN_M..=CG_MAX_M).contains(&cg))
    }

    /// Mass still available before MTOW; negative when overweight
    pub fn weight_margin(&self) -> f64 {
        MTOW_KG - self.takeoff_weight
    }
}

/// Resolve weight & balance for a loading
///
/// # Arguments
/// * `profile` - Airframe empty weight and station arms
/// * `load` - Crew, baggage and fuel quantities
/// * `fuel_weight` - Fuel mass (kg), normally [`crate::limits::fuel_weight_kg`] of `load.fuel_liters`
pub fn resolve(profile: &AircraftProfile, load: &LoadInputs, fuel_weight: f64) -> WeightBalanceResult {
    let empty_moment = profile.empty_weight * profile.empty_arm;
    let pax_moment = load.pax_weight * profile.crew_arm;
    let baggage_moment = load.baggage_weight * profile.baggage_arm;
    let fuel_moment = fuel_weight * profile.fuel_arm;
    let total_moment = empty_moment + pax_moment + baggage_moment + fuel_moment;

    let zero_fuel_weight = profile.empty_weight + load.pax_weight + load.baggage_weight;
    let takeoff_weight = zero_fuel_weight + fuel_weight;
    let center_of_gravity = total_moment / takeoff_weight;

    let max_payload = MTOW_KG - profile.empty_weight - fuel_weight;
    let payload = load.pax_weight + load.baggage_weight;

    tracing::debug!(
        "W&B: ZFW {:.1} kg, TOGW {:.1} kg, moment {:.1} kg·m, CG {:.3} m",
        zero_fuel_weight,
        takeoff_weight,
        total_moment,
        center_of_gravity
    );

    WeightBalanceResult {
        fuel_weight,
        empty_moment,
        pax_moment,
        baggage_moment,
        fuel_moment,
        total_moment,
        zero_fuel_weight,
        takeoff_weight,
        center_of_gravity,
        max_payload,
        payload,
        payload_remaining: max_payload - payload,
    }
}
