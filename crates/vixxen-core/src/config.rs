//! Calculator configuration
//!
//! Operator settings supplied as JSON by the host application. The engine
//! never reads files itself; the host passes the document contents.

use serde::{Deserialize, Serialize};

use crate::catalog::{AircraftCatalog, AircraftEntry};
use crate::error::Result;
use crate::fuel::FuelDefaults;

/// Operator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculatorConfig {
    /// Registration selected when the calculator starts
    #[serde(default = "default_registration")]
    pub default_registration: String,

    /// Burn rate and taxi fuel restored by "reset fuel defaults"
    pub fuel_defaults: FuelDefaults,

    /// Replaces the built-in fleet when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<Vec<AircraftEntry>>,
}

fn default_registration() -> String {
    "23-8666".to_string()
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_registration: default_registration(),
            fuel_defaults: FuelDefaults::default(),
            aircraft: None,
        }
    }
}

impl CalculatorConfig {
    /// Parse a configuration document
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        tracing::debug!(
            "Loaded calculator config (default aircraft {}, {} custom entries)",
            config.default_registration,
            config.aircraft.as_ref().map_or(0, Vec::len)
        );
        Ok(config)
    }

    /// Serialize back to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The fleet this configuration describes
    pub fn catalog(&self) -> Result<AircraftCatalog> {
        match &self.aircraft {
            Some(entries) => AircraftCatalog::from_entries(entries.clone()),
            None => Ok(AircraftCatalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.catalog().unwrap().len(), 5);
    }

    #[test]
    fn test_custom_fleet() {
        let config = CalculatorConfig::from_json(
            r#"{
                "defaultRegistration": "24-0001",
                "fuelDefaults": { "burnRateLph": 16.5 },
                "aircraft": [
                    {
                        "registration": "24-0001",
                        "emptyWeight": 325.0,
                        "emptyArm": 1.6,
                        "crewArm": 1.663,
                        "baggageArm": 2.32,
                        "fuelArm": 1.96
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.fuel_defaults.burn_rate_lph, 16.5);
        assert_eq!(config.fuel_defaults.taxi_fuel_liters, 2.0);
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.registrations().collect::<Vec<_>>(), vec!["24-0001"]);
        assert!(!catalog.contains("23-8666"));
    }

    #[test]
    fn test_missing_registration_falls_back() {
        let config = CalculatorConfig::from_json(r#"{ "fuelDefaults": { "taxiFuelLiters": 3.0 } }"#).unwrap();
        assert_eq!(config.default_registration, "23-8666");
        assert_eq!(config.fuel_defaults.taxi_fuel_liters, 3.0);
    }

    #[test]
    fn test_to_json_reloads() {
        let config = CalculatorConfig {
            default_registration: "23-8852".to_string(),
            fuel_defaults: FuelDefaults {
                burn_rate_lph: 17.0,
                taxi_fuel_liters: 2.5,
            },
            aircraft: None,
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("\"defaultRegistration\": \"23-8852\""));
        assert!(!json.contains("aircraft"));
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);

        let with_fleet = CalculatorConfig {
            aircraft: Some(vec![AircraftEntry {
                registration: "24-0001".to_string(),
                profile: crate::catalog::AircraftProfile::with_standard_stations(325.0, 1.6),
            }]),
            ..config
        };
        let json = with_fleet.to_json().unwrap();
        assert!(json.contains("\"emptyWeight\": 325.0"));
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), with_fleet);
    }

    #[test]
    fn test_malformed_document() {
        let err = CalculatorConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }
}
