//! Editor entities as seen by the modding layer.
//!
//! The modding layer never owns entities. It only reads their bounds, which
//! place an entity on the track grid: `x` and `width` in beats, `y` and
//! `height` in tracks.

/// Position and size of an entity on the track grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Creates bounds from position and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates bounds at the origin with the given width and a height of one track.
    pub fn with_width(width: f32) -> Self {
        Self::new(0.0, 0.0, width, 1.0)
    }
}

/// Anything placed on the editor's track grid.
///
/// # Example
///
/// ```
/// use rhre_core::{Bounds, Entity};
///
/// struct Cue {
///     bounds: Bounds,
/// }
///
/// impl Entity for Cue {
///     fn bounds(&self) -> &Bounds {
///         &self.bounds
///     }
/// }
///
/// let cue = Cue { bounds: Bounds::with_width(2.0) };
/// assert_eq!(cue.bounds().width, 2.0);
/// ```
pub trait Entity {
    /// Returns the entity's bounds.
    fn bounds(&self) -> &Bounds;
}

impl Entity for Bounds {
    fn bounds(&self) -> &Bounds {
        self
    }
}
