//! RHRE - Rhythm Heaven Remix Editor building blocks
//!
//! Metadata values that label cues by their size, their configuration files,
//! and the news screen presenter.
//!
//! # Example
//!
//! ```rust
//! use rhre::prelude::*;
//!
//! let length = RangeValue::width()
//!     .with_else_value("custom")
//!     .with_rule("1".parse().unwrap(), "one beat")
//!     .with_rule("2 .. 4".parse().unwrap(), "a few beats");
//!
//! assert_eq!(length.value(Some(&Bounds::with_width(3.0))), "a few beats");
//! assert_eq!(length.value(Some(&Bounds::with_width(8.0))), "custom");
//! assert_eq!(length.value(None), "custom");
//! ```

// Entities and metadata values
pub use rhre_core::{
    Bounds, Entity, EntityField, FieldParseError, MetadataSet, MetadataValue, RangeParseError,
    RangeRule, RangeValue, RhreError, ValueRange, EPSILON,
};

// Metadata configuration files
pub use rhre_config::{ConfigError, MetadataConfig, MetadataValueConfig, RangeSpec};

// News screen
pub use rhre_news as news;

/// Console output, available with the `console` feature.
#[cfg(feature = "console")]
pub use rhre_console as console;

pub mod prelude {
    pub use super::{Bounds, Entity, EntityField, MetadataSet, MetadataValue, RangeValue};
    pub use super::{MetadataConfig, ValueRange};
    pub use super::news::{ArticleSource, NewsScreen, PreferenceStore, ThumbnailFetcher};
}
