//! Metadata values for modded game definitions
//!
//! A metadata value resolves the label shown next to an entity in the editor:
//! - `MetadataValue::Static`: a fixed label, no entity needed
//! - `MetadataValue::Range`: a label picked by matching one of the entity's
//!   measurements against ordered range rules
//!
//! A game definition names its values in a [`MetadataSet`].
//!
//! # Example
//!
//! ```
//! use rhre_core::{Bounds, MetadataValue, RangeValue, ValueRange};
//!
//! let length = MetadataValue::Range(
//!     RangeValue::width()
//!         .with_rule(ValueRange::point(1.0), "one beat")
//!         .with_rule(ValueRange::new(2.0, 4.0), "a few beats")
//!         .with_else_value("custom"),
//! );
//!
//! assert_eq!(length.value(Some(&Bounds::with_width(1.0))), "one beat");
//! assert_eq!(length.value(Some(&Bounds::with_width(3.5))), "a few beats");
//! assert_eq!(length.value(Some(&Bounds::with_width(8.0))), "custom");
//! assert_eq!(length.value(None), "custom");
//! ```

mod range;
mod set;
mod value;

#[cfg(test)]
mod tests;

pub use range::{RangeParseError, ValueRange, EPSILON};
pub use set::MetadataSet;
pub use value::{
    EntityField, FieldAccessor, FieldParseError, MetadataValue, RangeRule, RangeValue,
};
