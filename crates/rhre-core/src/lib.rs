//! RHRE Core - Core types for the editor's modding layer
//!
//! This crate provides the fundamental abstractions shared by the editor crates:
//! - Entity bounds, the measurements metadata values read
//! - Metadata values resolving a display label for an entity
//! - Range rules and their textual grammar

pub mod entity;
pub mod error;
pub mod modding;

pub use entity::{Bounds, Entity};
pub use error::RhreError;
pub use modding::{
    EntityField, FieldParseError, MetadataSet, MetadataValue, RangeParseError, RangeRule,
    RangeValue, ValueRange, EPSILON,
};
