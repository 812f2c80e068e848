//! Aircraft Catalog
//!
//! Static lookup from registration to the empty-weight data and station arms
//! of each individual airframe. Arms are measured aft of the datum in metres.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Weighed empty mass and loading stations of one airframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftProfile {
    /// Basic empty weight (kg)
    pub empty_weight: f64,
    /// Empty-weight CG arm (m)
    pub empty_arm: f64,
    /// Crew/passenger seat arm (m)
    pub crew_arm: f64,
    /// Baggage compartment arm (m)
    pub baggage_arm: f64,
    /// Fuel tank arm (m)
    pub fuel_arm: f64,
}

impl AircraftProfile {
    /// Build a profile using the seat, baggage and tank arms shared by the type
    pub const fn with_standard_stations(empty_weight: f64, empty_arm: f64) -> Self {
        Self {
            empty_weight,
            empty_arm,
            crew_arm: 1.663,
            baggage_arm: 2.320,
            fuel_arm: 1.960,
        }
    }

    fn validate(&self, registration: &str) -> Result<()> {
        let invalid = |message: &str| EngineError::InvalidProfile {
            registration: registration.to_string(),
            message: message.to_string(),
        };

        if !self.empty_weight.is_finite() || self.empty_weight <= 0.0 {
            return Err(invalid("empty weight must be a positive number"));
        }
        let arms = [self.empty_arm, self.crew_arm, self.baggage_arm, self.fuel_arm];
        if arms.iter().any(|arm| !arm.is_finite()) {
            return Err(invalid("station arms must be finite"));
        }
        Ok(())
    }
}

/// A registration and its profile, as listed in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftEntry {
    /// Registration marking, e.g. `23-8666`
    pub registration: String,
    /// Weighed data for this airframe
    #[serde(flatten)]
    pub profile: AircraftProfile,
}

/// Registration → profile lookup, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftCatalog {
    entries: Vec<AircraftEntry>,
}

const BUILTIN: [(&str, AircraftProfile); 5] = [
    ("23-8666", AircraftProfile::with_standard_stations(320.9, 1.581)),
    ("23-8639", AircraftProfile::with_standard_stations(318.5, 1.627)),
    ("23-8852", AircraftProfile::with_standard_stations(332.5, 1.645)),
    ("23-8848", AircraftProfile::with_standard_stations(316.2, 1.630)),
    ("Generic", AircraftProfile::with_standard_stations(332.5, 1.645)),
];

impl Default for AircraftCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AircraftCatalog {
    /// The fleet weighed data shipped with the engine
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN
                .iter()
                .map(|(registration, profile)| AircraftEntry {
                    registration: registration.to_string(),
                    profile: *profile,
                })
                .collect(),
        }
    }

    /// Build a catalog from configured entries
    ///
    /// Order is preserved. A later entry with the same registration replaces
    /// the earlier one in place.
    pub fn from_entries(entries: Vec<AircraftEntry>) -> Result<Self> {
        let mut catalog = Self { entries: Vec::with_capacity(entries.len()) };
        for entry in entries {
            entry.profile.validate(&entry.registration)?;
            match catalog
                .entries
                .iter_mut()
                .find(|e| e.registration == entry.registration)
            {
                Some(existing) => existing.profile = entry.profile,
                None => catalog.entries.push(entry),
            }
        }
        Ok(catalog)
    }

    /// Look up a registration
    pub fn get(&self, registration: &str) -> Result<&AircraftProfile> {
        self.entries
            .iter()
            .find(|e| e.registration == registration)
            .map(|e| &e.profile)
            .ok_or_else(|| {
                tracing::warn!("Unknown aircraft registration requested: {registration}");
                EngineError::UnknownRegistration(registration.to_string())
            })
    }

    /// Whether a registration is in the fleet
    pub fn contains(&self, registration: &str) -> bool {
        self.entries.iter().any(|e| e.registration == registration)
    }

    /// Registrations in catalog order, for a selector
    pub fn registrations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.registration.as_str())
    }

    /// Number of airframes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog lists no airframes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
