//! Fuel Planning
//!
//! Derives trip, reserve and taxi fuel for a single leg in one of two modes:
//! - By time: trip fuel follows from planned flight time and burn rate
//! - By endurance: trip fuel is whatever the fuel on board leaves after
//!   taxi, reserve, unusable fuel and (optionally) the reserve uplift
//!
//! Results are recomputed from scratch on every call.

use serde::{Deserialize, Serialize};

use crate::limits::{
    MAX_FUEL_LITERS, RESERVE_TIME_HOURS, RESERVE_UPLIFT_FRACTION, UNUSABLE_FUEL_LITERS,
};

/// How trip fuel is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FuelMode {
    /// Trip fuel from planned time × burn rate
    #[default]
    #[serde(rename = "time")]
    ByTime,
    /// Endurance from fuel on board
    #[serde(rename = "endurance")]
    ByEndurance,
}

/// Fuel planning inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPlanInputs {
    /// How trip fuel is derived
    pub mode: FuelMode,
    /// Planned flight time (h), used only in [`FuelMode::ByTime`]
    pub planned_time_hours: f64,
    /// Cruise burn rate (L/h)
    pub fuel_burn_rate_lph: f64,
    /// Fuel used before takeoff (L)
    pub taxi_fuel_liters: f64,
    /// Carry the operator's additional 10% reserve
    pub use_reserve_uplift: bool,
}

impl Default for FuelPlanInputs {
    fn default() -> Self {
        Self {
            mode: FuelMode::ByTime,
            planned_time_hours: 1.2,
            fuel_burn_rate_lph: 15.0,
            taxi_fuel_liters: 2.0,
            use_reserve_uplift: false,
        }
    }
}

/// Fuel plan breakdown (all quantities in liters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPlanResult {
    /// Fuel burned en route
    pub trip_fuel: f64,
    /// Fuel used before takeoff
    pub taxi_fuel: f64,
    /// Fixed 30 minute reserve
    pub reserve_fuel: f64,
    /// Operator uplift, 10% of trip fuel when enabled
    pub uplift_reserve: f64,
    /// Trip + taxi + reserve + unusable + uplift
    pub total_required: f64,
    /// Tank capacity minus total required. Negative means the plan does not fit.
    pub remaining_fuel: f64,
    /// Flight time (h). Non-finite when the burn rate is zero.
    #[serde(with = "crate::non_finite")]
    pub endurance: f64,
}

impl FuelPlanResult {
    /// Endurance, or `None` when it cannot be displayed (zero burn rate)
    pub fn endurance_hours(&self) -> Option<f64> {
        self.endurance.is_finite().then_some(self.endurance)
    }
}

/// Compute a fuel plan
///
/// # Arguments
/// * `inputs` - Mode, burn rate, taxi fuel and reserve policy
/// * `fuel_on_board` - Fuel loaded (L); drives trip fuel in endurance mode
///
/// In endurance mode the uplift is withheld from the fuel available for the
/// trip, while the reported `uplift_reserve` is always 10% of the final trip
/// fuel. The two bases differ.
pub fn plan(inputs: &FuelPlanInputs, fuel_on_board: f64) -> FuelPlanResult {
    let burn_rate = inputs.fuel_burn_rate_lph;

    let (trip_fuel, endurance) = match inputs.mode {
        FuelMode::ByTime => (inputs.planned_time_hours * burn_rate, inputs.planned_time_hours),
        FuelMode::ByEndurance => {
            let reserve = RESERVE_TIME_HOURS * burn_rate;
            let available_for_trip =
                fuel_on_board - inputs.taxi_fuel_liters - reserve - UNUSABLE_FUEL_LITERS;
            let uplift = if inputs.use_reserve_uplift {
                available_for_trip * RESERVE_UPLIFT_FRACTION
            } else {
                0.0
            };
            let trip = available_for_trip - uplift;
            (trip, trip / burn_rate)
        }
    };

    let reserve_fuel = RESERVE_TIME_HOURS * burn_rate;
    let uplift_reserve = if inputs.use_reserve_uplift {
        trip_fuel * RESERVE_UPLIFT_FRACTION
    } else {
        0.0
    };
    let total_required =
        trip_fuel + inputs.taxi_fuel_liters + reserve_fuel + UNUSABLE_FUEL_LITERS + uplift_reserve;

    let result = FuelPlanResult {
        trip_fuel,
        taxi_fuel: inputs.taxi_fuel_liters,
        reserve_fuel,
        uplift_reserve,
        total_required,
        remaining_fuel: MAX_FUEL_LITERS - total_required,
        endurance,
    };

    tracing::debug!(
        "Fuel plan ({:?}): trip {:.1} L, total {:.1} L, remaining {:.1} L",
        inputs.mode,
        result.trip_fuel,
        result.total_required,
        result.remaining_fuel
    );

    result
}

/// Fuel quantity to load so the tanks match a time-based plan
///
/// Rounds the requirement up to a whole liter and caps it at tank capacity.
/// Returns `None` in endurance mode, where fuel on board is an input.
pub fn fuel_to_load(inputs: &FuelPlanInputs, result: &FuelPlanResult) -> Option<f64> {
    match inputs.mode {
        FuelMode::ByTime => Some(result.total_required.ceil().min(MAX_FUEL_LITERS)),
        FuelMode::ByEndurance => None,
    }
}

/// Operator defaults restored by "reset fuel defaults"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuelDefaults {
    /// Default burn rate (L/h)
    pub burn_rate_lph: f64,
    /// Default taxi fuel (L)
    pub taxi_fuel_liters: f64,
}

impl Default for FuelDefaults {
    fn default() -> Self {
        Self {
            burn_rate_lph: 15.0,
            taxi_fuel_liters: 2.0,
        }
    }
}

impl FuelDefaults {
    /// Restore burn rate and taxi fuel, leaving mode, time and reserve policy alone
    pub fn apply(&self, inputs: &mut FuelPlanInputs) {
        inputs.fuel_burn_rate_lph = self.burn_rate_lph;
        inputs.taxi_fuel_liters = self.taxi_fuel_liters;
    }
}
