//! Named metadata values of a game definition.

use super::value::MetadataValue;
use crate::entity::Entity;

/// Metadata values keyed by name, in definition order.
#[derive(Debug, Clone, Default)]
pub struct MetadataSet {
    values: Vec<(String, MetadataValue)>,
}

impl MetadataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, returning the one it replaced if `name` was taken.
    ///
    /// A replaced value keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: MetadataValue) -> Option<MetadataValue> {
        let name = name.into();
        match self.values.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.values.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&MetadataValue> {
        self.values
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolves the named value for an entity.
    ///
    /// Returns `None` only if no value has that name.
    pub fn value<'a>(&'a self, name: &str, entity: Option<&dyn Entity>) -> Option<&'a str> {
        self.get(name).map(|value| value.value(entity))
    }

    /// Resolves every value for an entity, in definition order.
    pub fn resolve_all<'a>(&'a self, entity: Option<&dyn Entity>) -> Vec<(&'a str, &'a str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.value(entity)))
            .collect()
    }

    /// Returns true if any value reads from an entity.
    pub fn needs_entity(&self) -> bool {
        self.values.iter().any(|(_, value)| value.needs_entity())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
