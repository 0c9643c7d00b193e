//! Articles and the subsystem that fetches them.

use std::fmt;

/// A news article as delivered by the news feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Thumbnail URL, blank when the article has none.
    pub thumbnail: String,
    pub published_date: String,
    pub url: Option<String>,
    /// Text shown on the link button instead of the bare URL.
    pub url_title: Option<String>,
}

impl Article {
    /// Creates an article with an id, title and body.
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// The empty article shown before any article is opened.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = date.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_url_title(mut self, title: impl Into<String>) -> Self {
        self.url_title = Some(title.into());
        self
    }
}

/// Progress of the news feed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchState {
    Fetching,
    Done,
    Error,
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchState::Fetching => write!(f, "fetching"),
            FetchState::Done => write!(f, "done"),
            FetchState::Error => write!(f, "error"),
        }
    }
}

/// The subsystem fetching articles from the news feed.
///
/// `fetch` starts a fetch and returns; the owner reports the resulting state
/// changes to the screen.
pub trait ArticleSource {
    /// Returns the current fetch state.
    fn fetch_state(&self) -> FetchState;

    /// Returns the articles of the last successful fetch, newest first.
    fn articles(&self) -> &[Article];

    /// Starts fetching the article list.
    fn fetch(&mut self);
}
