//! Provider configuration.
//!
//! A provider is described as data: a name and a list of mirrors, each
//! binding a source namespace to a destination namespace with a set of
//! properties. Configurations load from JSON:
//!
//! ```json
//! {
//!   "name": "power-emu",
//!   "mirrors": [{
//!     "source": "BatteryEmu",
//!     "destination": "Battery",
//!     "properties": [{"name": "ChargePercentage", "default": "100"}]
//!   }]
//! }
//! ```
//!
//! Property `kind` defaults to `discrete`.

use serde::{Deserialize, Serialize};
use statemirror_core::{MirrorError, PropertySpec, Result};
use std::collections::HashSet;
use std::path::Path;

/// Complete provider definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name.
    pub name: String,
    /// Mirrored namespace pairs, in registration order.
    #[serde(default)]
    pub mirrors: Vec<MirrorConfig>,
}

/// One source/destination namespace binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Namespace holding the write proxies.
    pub source: String,
    /// Namespace holding the readable cells.
    pub destination: String,
    /// Mirrored properties.
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
}

impl ProviderConfig {
    /// Empty configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mirrors: Vec::new(),
        }
    }

    /// Battery state emulation.
    ///
    /// `BatteryEmu` accepts writes that show up as the discrete
    /// properties of `Battery`.
    pub fn power_emu() -> Self {
        Self {
            name: "power-emu".to_string(),
            mirrors: vec![MirrorConfig {
                source: "BatteryEmu".to_string(),
                destination: "Battery".to_string(),
                properties: vec![
                    PropertySpec::discrete("ChargePercentage", "100"),
                    PropertySpec::discrete("IsCharging", "false"),
                    PropertySpec::discrete("OnBattery", "true"),
                    PropertySpec::discrete("LowBattery", "false"),
                    PropertySpec::discrete("ChargeBars", "8"),
                    PropertySpec::discrete("TimeUntilLow", "100000"),
                    PropertySpec::discrete("TimeUntilFull", "0"),
                ],
            }],
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ProviderConfig =
            serde_json::from_str(json).map_err(|e| MirrorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MirrorError::InvalidConfig(e.to_string()))
    }

    /// Check names.
    ///
    /// Rejects empty provider, namespace and property names, a namespace
    /// name used more than once anywhere in the config, and a property
    /// name repeated within one mirror.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MirrorError::InvalidConfig("provider name is empty".to_string()));
        }

        let mut namespaces = HashSet::new();
        for mirror in &self.mirrors {
            for ns in [&mirror.source, &mirror.destination] {
                if ns.trim().is_empty() {
                    return Err(MirrorError::InvalidConfig(format!(
                        "empty namespace name in provider {}",
                        self.name
                    )));
                }
                if !namespaces.insert(ns.as_str()) {
                    return Err(MirrorError::InvalidConfig(format!(
                        "namespace {} is used more than once",
                        ns
                    )));
                }
            }

            let mut properties = HashSet::new();
            for prop in &mirror.properties {
                if prop.name.trim().is_empty() {
                    return Err(MirrorError::InvalidConfig(format!(
                        "empty property name in {}",
                        mirror.source
                    )));
                }
                if !properties.insert(prop.name.as_str()) {
                    return Err(MirrorError::InvalidConfig(format!(
                        "property {} is defined twice in {}",
                        prop.name, mirror.source
                    )));
                }
            }
        }
        Ok(())
    }
}
