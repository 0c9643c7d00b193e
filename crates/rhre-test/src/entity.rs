//! Entity test fixtures.
//!
//! # Example
//!
//! ```
//! use rhre_core::Entity;
//! use rhre_test::entity::TestEntity;
//!
//! let cue = TestEntity::with_width(2.0);
//! assert_eq!(cue.bounds().width, 2.0);
//! ```

use rhre_core::{Bounds, Entity};

/// A named entity with arbitrary bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct TestEntity {
    pub name: String,
    pub bounds: Bounds,
}

impl TestEntity {
    /// Creates a test entity with the given bounds.
    pub fn new(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Creates an entity at the origin with the given width.
    pub fn with_width(width: f32) -> Self {
        Self::new("cue", Bounds::with_width(width))
    }

    /// Creates an entity at the origin with the given width and height.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new("cue", Bounds::new(0.0, 0.0, width, height))
    }
}

impl Entity for TestEntity {
    fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}
