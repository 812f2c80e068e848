//! # Vixxen Core Library
//!
//! Calculation engine for the Vixxen weight & balance and performance calculator.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Fleet catalog of weighed empty masses and station arms
//! - Fuel planning by flight time or by endurance
//! - Weight & balance resolution and envelope warnings
//! - Runway performance derating with an ordered factor audit
//!
//! Every calculation is a pure function of its inputs. Presentation
//! (forms, bars, the CG diagram) belongs to the host application.
//!
//! ## Example
//!
//! ```rust
//! use vixxen_core::calculator::Calculator;
//!
//! let mut calc = Calculator::new();
//! calc.load.pax_weight = 90.0;
//! calc.select_aircraft("23-8639")?;
//!
//! let report = calc.loading_report()?;
//! println!("CG: {:.3} m", report.weight_balance.center_of_gravity);
//! for warning in &report.warnings {
//!     println!("! {warning}");
//! }
//!
//! let perf = calc.performance_report();
//! println!("Takeoff: {} m", perf.takeoff_distance_rounded());
//! # Ok::<(), vixxen_core::EngineError>(())
//! ```

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fuel;
pub mod limits;
mod non_finite;
pub mod performance;
pub mod warnings;
pub mod weight_balance;

pub use error::{EngineError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::calculator::{Calculator, LoadingReport};
    pub use crate::catalog::{AircraftCatalog, AircraftEntry, AircraftProfile};
    pub use crate::config::CalculatorConfig;
    pub use crate::error::{EngineError, Result};
    pub use crate::fuel::{FuelDefaults, FuelMode, FuelPlanInputs, FuelPlanResult};
    pub use crate::performance::{
        AppliedFactor, PerformanceInputs, PerformanceResult, SurfaceType,
    };
    pub use crate::warnings::Warning;
    pub use crate::weight_balance::{LoadInputs, WeightBalanceResult};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
