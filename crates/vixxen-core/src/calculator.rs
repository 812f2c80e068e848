//! Calculator state
//!
//! Holds the pilot-entered inputs and produces fresh reports from them.
//! Each report reads the complete input snapshot and recomputes everything.

use serde::{Deserialize, Serialize};

use crate::catalog::{AircraftCatalog, AircraftProfile};
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::fuel::{self, FuelDefaults, FuelPlanInputs, FuelPlanResult};
use crate::limits::fuel_weight_kg;
use crate::performance::{self, PerformanceInputs, PerformanceResult};
use crate::warnings::{self, Warning};
use crate::weight_balance::{self, LoadInputs, WeightBalanceResult};

/// Loading outputs for the selected aircraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingReport {
    /// Selected registration
    pub registration: String,
    /// Profile the report was computed from
    pub aircraft: AircraftProfile,
    /// Fuel plan breakdown
    pub fuel: FuelPlanResult,
    /// Weights, moments and CG
    pub weight_balance: WeightBalanceResult,
    /// Every limit the loading violates
    pub warnings: Vec<Warning>,
}

/// Mutable input store for one calculator session
#[derive(Debug, Clone)]
pub struct Calculator {
    catalog: AircraftCatalog,
    registration: String,
    /// Crew, baggage and fuel on board
    pub load: LoadInputs,
    /// Fuel planning mode and parameters
    pub fuel_plan: FuelPlanInputs,
    /// Runway and environmental conditions
    pub performance: PerformanceInputs,
    fuel_defaults: FuelDefaults,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            catalog: AircraftCatalog::builtin(),
            registration: "23-8666".to_string(),
            load: LoadInputs::default(),
            fuel_plan: FuelPlanInputs::default(),
            performance: PerformanceInputs::default(),
            fuel_defaults: FuelDefaults::default(),
        }
    }
}

impl Calculator {
    /// Calculator with the built-in fleet and initial form values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator from operator configuration
    ///
    /// Fails if the configured default registration is not in the fleet.
    pub fn from_config(config: &CalculatorConfig) -> Result<Self> {
        let catalog = config.catalog()?;
        catalog.get(&config.default_registration)?;

        let mut fuel_plan = FuelPlanInputs::default();
        config.fuel_defaults.apply(&mut fuel_plan);

        Ok(Self {
            catalog,
            registration: config.default_registration.clone(),
            fuel_plan,
            fuel_defaults: config.fuel_defaults,
            ..Self::default()
        })
    }

    /// Fleet available for selection
    pub fn catalog(&self) -> &AircraftCatalog {
        &self.catalog
    }

    /// Currently selected registration
    pub fn registration(&self) -> &str {
        &self.registration
    }

    /// Select an aircraft; an unknown registration leaves the selection unchanged
    pub fn select_aircraft(&mut self, registration: &str) -> Result<()> {
        self.catalog.get(registration)?;
        self.registration = registration.to_string();
        Ok(())
    }

    /// Fuel plan, weight & balance and warnings for the current inputs
    pub fn loading_report(&self) -> Result<LoadingReport> {
        let aircraft = *self.catalog.get(&self.registration)?;

        let fuel = fuel::plan(&self.fuel_plan, self.load.fuel_liters);
        let weight_balance =
            weight_balance::resolve(&aircraft, &self.load, fuel_weight_kg(self.load.fuel_liters));
        let warnings = warnings::evaluate(&self.load, &weight_balance, &fuel);

        Ok(LoadingReport {
            registration: self.registration.clone(),
            aircraft,
            fuel,
            weight_balance,
            warnings,
        })
    }

    /// Derated runway distances for the current conditions
    pub fn performance_report(&self) -> PerformanceResult {
        performance::derate(&self.performance)
    }

    /// Load the fuel a time-based plan requires
    ///
    /// Returns the new fuel quantity, or `None` in endurance mode or when the
    /// tanks already hold that amount.
    pub fn sync_fuel_to_plan(&mut self) -> Option<f64> {
        let plan = fuel::plan(&self.fuel_plan, self.load.fuel_liters);
        let liters = fuel::fuel_to_load(&self.fuel_plan, &plan)?;
        if liters == self.load.fuel_liters {
            return None;
        }
        tracing::debug!("Fuel synced to plan: {} L -> {} L", self.load.fuel_liters, liters);
        self.load.fuel_liters = liters;
        Some(liters)
    }

    /// Restore the configured burn rate and taxi fuel
    pub fn reset_fuel_defaults(&mut self) {
        self.fuel_defaults.apply(&mut self.fuel_plan);
    }
}
