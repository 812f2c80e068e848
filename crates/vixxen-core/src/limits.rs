//! Airframe Limits
//!
//! Fixed limits and planning constants for the Vixxen type:
//! - Mass limits (MTOW, baggage)
//! - Fuel capacity, unusable fuel and reserve policy
//! - Center of gravity envelope
//!
//! Units are fixed: kilograms, metres, liters and hours.

/// Maximum takeoff weight (kg)
pub const MTOW_KG: f64 = 600.0;

/// Total fuel capacity (L)
pub const MAX_FUEL_LITERS: f64 = 90.0;

/// Usable fuel capacity (L)
pub const USABLE_FUEL_LITERS: f64 = 88.0;

/// Unusable fuel, always carried and never burned (L)
pub const UNUSABLE_FUEL_LITERS: f64 = 2.0;

/// Fixed reserve, expressed as flight time at the planned burn rate (h)
pub const RESERVE_TIME_HOURS: f64 = 0.5;

/// Operator reserve uplift as a fraction of trip fuel
pub const RESERVE_UPLIFT_FRACTION: f64 = 0.10;

/// Maximum baggage compartment load (kg)
pub const MAX_BAGGAGE_KG: f64 = 30.0;

/// Avgas/mogas density used for all fuel mass (kg/L)
pub const FUEL_DENSITY_KG_PER_L: f64 = 0.72;

/// Forward CG limit, aft of datum (m)
pub const CG_MIN_M: f64 = 1.528;

/// Aft CG limit, aft of datum (m)
pub const CG_MAX_M: f64 = 1.78;

/// Convert a fuel quantity in liters to its mass in kilograms
pub fn fuel_weight_kg(liters: f64) -> f64 {
    liters * FUEL_DENSITY_KG_PER_L
}
