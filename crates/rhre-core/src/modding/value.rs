//! Metadata value resolvers.

use std::fmt;
use std::str::FromStr;

use super::range::ValueRange;
use crate::entity::Entity;
use crate::error::{Result, RhreError};

/// Reads the measurement a range value matches against.
pub type FieldAccessor = fn(&dyn Entity) -> f32;

/// Entity measurements available to range values by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityField {
    X,
    Y,
    #[default]
    Width,
    Height,
}

impl EntityField {
    /// Returns the accessor reading this field from an entity.
    pub fn accessor(self) -> FieldAccessor {
        match self {
            EntityField::X => |e: &dyn Entity| e.bounds().x,
            EntityField::Y => |e: &dyn Entity| e.bounds().y,
            EntityField::Width => |e: &dyn Entity| e.bounds().width,
            EntityField::Height => |e: &dyn Entity| e.bounds().height,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityField::X => "x",
            EntityField::Y => "y",
            EntityField::Width => "width",
            EntityField::Height => "height",
        }
    }
}

impl fmt::Display for EntityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "x" => Ok(EntityField::X),
            "y" => Ok(EntityField::Y),
            "width" => Ok(EntityField::Width),
            "height" => Ok(EntityField::Height),
            other => Err(FieldParseError {
                message: format!(
                    "Unknown entity field '{}': expected x, y, width or height",
                    other
                ),
            }),
        }
    }
}

/// Error when parsing an entity field name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParseError {
    pub message: String,
}

impl fmt::Display for FieldParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field parse error: {}", self.message)
    }
}

impl std::error::Error for FieldParseError {}

/// A label shown for an entity, either fixed or picked by range rules.
#[derive(Debug, Clone)]
pub enum MetadataValue {
    /// Always the same label.
    Static(String),
    /// A label chosen from one of the entity's measurements.
    Range(RangeValue),
}

impl MetadataValue {
    /// Creates a static value.
    pub fn fixed(value: impl Into<String>) -> Self {
        MetadataValue::Static(value.into())
    }

    /// Returns true if resolving this value reads from an entity.
    pub fn needs_entity(&self) -> bool {
        match self {
            MetadataValue::Static(_) => false,
            MetadataValue::Range(_) => true,
        }
    }

    /// Resolves the label for an entity, if there is one.
    ///
    /// Never fails: a range value without an entity, or with no matching
    /// rule, resolves to its else value.
    pub fn value<'a>(&'a self, entity: Option<&dyn Entity>) -> &'a str {
        match self {
            MetadataValue::Static(value) => value.as_str(),
            MetadataValue::Range(range) => range.value(entity),
        }
    }
}

impl From<RangeValue> for MetadataValue {
    fn from(value: RangeValue) -> Self {
        MetadataValue::Range(value)
    }
}

/// A single `(range, label)` rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    pub range: ValueRange,
    pub label: String,
}

/// Ordered range rules over one entity measurement, with a fallback label.
///
/// Rules keep insertion order and are keyed by range: inserting a range that
/// is already present replaces its label without moving it. Lookup returns
/// the label of the first rule whose range matches.
#[derive(Debug, Clone)]
pub struct RangeValue {
    field: FieldAccessor,
    else_value: String,
    rules: Vec<RangeRule>,
}

impl RangeValue {
    /// Creates an empty range value reading its measurement with `field`.
    pub fn new(field: FieldAccessor) -> Self {
        Self {
            field,
            else_value: String::new(),
            rules: Vec::new(),
        }
    }

    /// Creates an empty range value over a named entity field.
    pub fn of_field(field: EntityField) -> Self {
        Self::new(field.accessor())
    }

    /// Range value over the entity's width.
    pub fn width() -> Self {
        Self::of_field(EntityField::Width)
    }

    /// Range value over the entity's height.
    pub fn height() -> Self {
        Self::of_field(EntityField::Height)
    }

    /// Range value over the entity's x position.
    pub fn x() -> Self {
        Self::of_field(EntityField::X)
    }

    /// Range value over the entity's y position.
    pub fn y() -> Self {
        Self::of_field(EntityField::Y)
    }

    /// Sets the fallback label.
    pub fn with_else_value(mut self, else_value: impl Into<String>) -> Self {
        self.else_value = else_value.into();
        self
    }

    /// Adds a rule.
    pub fn with_rule(mut self, range: ValueRange, label: impl Into<String>) -> Self {
        self.insert(range, label);
        self
    }

    pub fn else_value(&self) -> &str {
        &self.else_value
    }

    pub fn set_else_value(&mut self, else_value: impl Into<String>) {
        self.else_value = else_value.into();
    }

    /// Inserts a rule, returning the label it replaced if the range was
    /// already present.
    ///
    /// Inverted ranges are accepted and simply never match.
    pub fn insert(&mut self, range: ValueRange, label: impl Into<String>) -> Option<String> {
        let label = label.into();
        match self.rules.iter_mut().find(|rule| rule.range == range) {
            Some(rule) => Some(std::mem::replace(&mut rule.label, label)),
            None => {
                self.rules.push(RangeRule { range, label });
                None
            }
        }
    }

    /// Inserts a rule, rejecting ranges that could never match.
    ///
    /// # Errors
    ///
    /// Returns [`RhreError::InvalidRange`] if `range` starts after it ends
    /// or has a NaN bound.
    pub fn insert_checked(
        &mut self,
        range: ValueRange,
        label: impl Into<String>,
    ) -> Result<Option<String>> {
        if range.has_nan() {
            return Err(RhreError::InvalidRange(format!("{} has a NaN bound", range)));
        }
        if !range.can_match() {
            return Err(RhreError::InvalidRange(format!(
                "{} starts after it ends",
                range
            )));
        }
        Ok(self.insert(range, label))
    }

    /// Iterates rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = &RangeRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolves the label for an entity.
    pub fn value<'a>(&'a self, entity: Option<&dyn Entity>) -> &'a str {
        let Some(entity) = entity else {
            return &self.else_value;
        };
        let measurement = (self.field)(entity);

        self.rules
            .iter()
            .find(|rule| rule.range.matches(measurement))
            .map_or(&self.else_value, |rule| &rule.label)
    }
}
