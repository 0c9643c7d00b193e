//! Configuration system for RHRE metadata values.
//!
//! Load the metadata values of a game definition from TOML or YAML files
//! instead of building them in code.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use rhre_config::MetadataConfig;
//! use rhre_core::Bounds;
//!
//! let config = MetadataConfig::from_toml_str(r#"
//!     [[metadata]]
//!     type = "static"
//!     name = "game"
//!     value = "Lockstep"
//!
//!     [[metadata]]
//!     type = "range"
//!     name = "length"
//!     else = "custom"
//!     rules = [
//!         { range = "1", value = "one beat" },
//!         { range = "1.5 .. 4", value = "a few beats" },
//!     ]
//! "#).unwrap();
//!
//! let values = config.build().unwrap();
//! assert_eq!(values.value("game", None), Some("Lockstep"));
//! assert_eq!(values.value("length", Some(&Bounds::with_width(2.0))), Some("a few beats"));
//! ```
//!
//! Use an empty set when the file is missing:
//!
//! ```
//! use rhre_config::MetadataConfig;
//!
//! let config = MetadataConfig::load("metadata.toml").unwrap_or_default();
//! // Proceeds without metadata values if the file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use rhre_core::{EntityField, MetadataSet, MetadataValue, RangeParseError, RangeValue, ValueRange};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Range(#[from] RangeParseError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Metadata values of one game definition.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MetadataConfig {
    /// Value definitions, in display order.
    #[serde(default)]
    pub metadata: Vec<MetadataValueConfig>,
}

impl MetadataConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a value definition.
    pub fn with_entry(mut self, entry: MetadataValueConfig) -> Self {
        self.metadata.push(entry);
        self
    }

    /// Builds the metadata values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for duplicate names or ranges that
    /// start after they end, and [`ConfigError::Range`] for range text that
    /// doesn't parse.
    pub fn build(&self) -> Result<MetadataSet, ConfigError> {
        let mut values = MetadataSet::new();

        for entry in &self.metadata {
            let name = entry.name();
            if values.contains(name) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate metadata value '{}'",
                    name
                )));
            }

            let value = entry.to_value()?;
            debug!(
                event = "metadata_value",
                name,
                needs_entity = value.needs_entity(),
            );
            values.insert(name, value);
        }

        info!(event = "metadata_loaded", values = values.len() as u64);
        Ok(values)
    }
}

/// A single metadata value definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MetadataValueConfig {
    /// A fixed label.
    Static(StaticValueConfig),

    /// A label picked by range rules.
    Range(RangeValueConfig),
}

impl MetadataValueConfig {
    pub fn name(&self) -> &str {
        match self {
            MetadataValueConfig::Static(config) => &config.name,
            MetadataValueConfig::Range(config) => &config.name,
        }
    }

    /// Converts the definition into a metadata value.
    pub fn to_value(&self) -> Result<MetadataValue, ConfigError> {
        match self {
            MetadataValueConfig::Static(config) => Ok(MetadataValue::fixed(config.value.clone())),
            MetadataValueConfig::Range(config) => config.to_range_value().map(MetadataValue::Range),
        }
    }
}

/// Static value configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StaticValueConfig {
    pub name: String,
    pub value: String,
}

/// Range value configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RangeValueConfig {
    pub name: String,

    /// Entity measurement the rules match against.
    #[serde(default)]
    pub field: EntityField,

    /// Label when no rule matches or there is no entity.
    #[serde(default, rename = "else")]
    pub else_value: String,

    /// Rules, first match wins.
    #[serde(default)]
    pub rules: Vec<RangeRuleConfig>,
}

impl RangeValueConfig {
    /// Converts the definition into a range value.
    pub fn to_range_value(&self) -> Result<RangeValue, ConfigError> {
        let mut value = RangeValue::of_field(self.field).with_else_value(self.else_value.clone());

        for rule in &self.rules {
            let range = rule.range.to_range()?;
            let replaced = value
                .insert_checked(range, rule.value.clone())
                .map_err(|e| ConfigError::Invalid(format!("metadata value '{}': {}", self.name, e)))?;
            if let Some(previous) = replaced {
                debug!(
                    event = "metadata_rule_replaced",
                    name = %self.name,
                    range = %range,
                    previous = %previous,
                );
            }
        }

        Ok(value)
    }
}

/// A `(range, label)` rule.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RangeRuleConfig {
    pub range: RangeSpec,
    pub value: String,
}

/// How a rule's range is written.
///
/// Every form takes unsigned bounds only, matching the text grammar.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RangeSpec {
    /// `"1.5 .. 4"` or `"2"`.
    Text(String),

    /// A single point.
    Point(f32),

    /// `[start, end]`.
    Bounds([f32; 2]),
}

impl RangeSpec {
    /// Converts the written form into a range.
    ///
    /// # Errors
    ///
    /// Returns [`RangeParseError`] for malformed text or a negative bound.
    pub fn to_range(&self) -> Result<ValueRange, RangeParseError> {
        match self {
            RangeSpec::Text(text) => text.parse(),
            RangeSpec::Point(value) => {
                unsigned(*value, self)?;
                Ok(ValueRange::point(*value))
            }
            RangeSpec::Bounds([start, end]) => {
                unsigned(*start, self)?;
                unsigned(*end, self)?;
                Ok(ValueRange::new(*start, *end))
            }
        }
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSpec::Text(text) => f.write_str(text),
            RangeSpec::Point(value) => write!(f, "{}", value),
            RangeSpec::Bounds([start, end]) => write!(f, "[{}, {}]", start, end),
        }
    }
}

fn unsigned(bound: f32, spec: &RangeSpec) -> Result<(), RangeParseError> {
    if bound < 0.0 {
        return Err(RangeParseError {
            message: format!(
                "Invalid bound '{}' in range '{}': expected a decimal number",
                bound, spec
            ),
        });
    }
    Ok(())
}
