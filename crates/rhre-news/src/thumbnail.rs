//! Article thumbnails.

use rhre_core::error::Result;

/// Loads article thumbnails in the background and caches them by URL.
pub trait ThumbnailFetcher {
    /// Returns true if the thumbnail at `url` is already loaded.
    fn is_cached(&self, url: &str) -> bool;

    /// Starts loading the thumbnail at `url`.
    ///
    /// Completion is reported to the screen by the owner.
    fn request(&mut self, url: &str) -> Result<()>;

    /// Cancels every pending request.
    fn cancel_all(&mut self);

    /// Drops every cached thumbnail.
    fn remove_all(&mut self);
}

/// What an article button shows as its image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Thumbnail {
    /// The editor logo, for articles without a usable thumbnail.
    #[default]
    Placeholder,
    /// A loaded thumbnail.
    Ready(String),
    /// A thumbnail still loading; nothing is drawn yet.
    Pending(String),
}

impl Thumbnail {
    /// Returns the URL of a ready or pending thumbnail.
    pub fn url(&self) -> Option<&str> {
        match self {
            Thumbnail::Placeholder => None,
            Thumbnail::Ready(url) | Thumbnail::Pending(url) => Some(url),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Thumbnail::Pending(_))
    }
}
