//! Sensor and schematic definitions the menus are derived from.
//!
//! A built-in table covers the stock device. A YAML file with the same shape
//! can replace it at startup; it is never reloaded afterwards.

mod builtin;
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, fs, path::Path, sync::OnceLock};

/// The clock channel shows on system screens but never in the dashboard sweep.
pub const CLOCK_KEY: &str = "CLOCK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GraphType {
    VerticalBar,
    Line,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorCategory {
    Environment,
    Motion,
    System,
    Time,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSpec {
    pub key: String,
    pub display_name: String,
    #[serde(default)]
    pub units: String,
    pub graph_type: GraphType,
    pub color_key: String,
    pub category: SensorCategory,
}

impl SensorSpec {
    /// Sensors listed in the sensors submenu.
    pub fn is_browsable(&self) -> bool {
        matches!(
            self.category,
            SensorCategory::Environment | SensorCategory::Motion
        )
    }

    /// Sensors visited by the dashboard auto-cycle.
    pub fn is_graphable(&self) -> bool {
        self.graph_type != GraphType::None && self.key != CLOCK_KEY
    }
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchematicSpec {
    pub model: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_yaml::Error),
    NoSensors,
    InvalidKey(String),
    DuplicateKey(String),
    EmptyName(String),
    DuplicateModel(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(err) => write!(f, "catalog is not valid YAML: {err}"),
            CatalogError::NoSensors => f.write_str("catalog defines no sensors"),
            CatalogError::InvalidKey(key) => write!(
                f,
                "sensor key '{key}' must be upper-case letters, digits and underscores"
            ),
            CatalogError::DuplicateKey(key) => write!(f, "sensor key '{key}' is defined twice"),
            CatalogError::EmptyName(key) => write!(f, "entry '{key}' has an empty display name"),
            CatalogError::DuplicateModel(model) => {
                write!(f, "schematic model '{model}' is defined twice")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

fn sensor_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("sensor key pattern"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sensors: Vec<SensorSpec>,
    #[serde(default)]
    pub schematics: Vec<SchematicSpec>,
}

impl Catalog {
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(raw).map_err(CatalogError::Parse)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file, or the built-in table when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid catalog {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.sensors.is_empty() {
            return Err(CatalogError::NoSensors);
        }
        let mut keys = HashSet::new();
        for sensor in &self.sensors {
            if !sensor_key_pattern().is_match(&sensor.key) {
                return Err(CatalogError::InvalidKey(sensor.key.clone()));
            }
            if !keys.insert(sensor.key.as_str()) {
                return Err(CatalogError::DuplicateKey(sensor.key.clone()));
            }
            if sensor.display_name.trim().is_empty() {
                return Err(CatalogError::EmptyName(sensor.key.clone()));
            }
        }
        let mut models = HashSet::new();
        for schematic in &self.schematics {
            if !models.insert(schematic.model.as_str()) {
                return Err(CatalogError::DuplicateModel(schematic.model.clone()));
            }
            if schematic.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(schematic.model.clone()));
            }
        }
        Ok(())
    }

    pub fn sensor(&self, key: &str) -> Option<&SensorSpec> {
        self.sensors.iter().find(|sensor| sensor.key == key)
    }

    pub fn schematic(&self, model: &str) -> Option<&SchematicSpec> {
        self.schematics.iter().find(|schematic| schematic.model == model)
    }

    /// Keys the dashboard cycles through, in catalog order.
    pub fn dashboard_keys(&self) -> Vec<String> {
        self.sensors
            .iter()
            .filter(|sensor| sensor.is_graphable())
            .map(|sensor| sensor.key.clone())
            .collect()
    }

    pub fn sensor_keys(&self) -> Vec<String> {
        self.sensors.iter().map(|sensor| sensor.key.clone()).collect()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
