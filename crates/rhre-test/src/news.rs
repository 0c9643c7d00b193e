//! News screen test fixtures.
//!
//! In-memory stand-ins for the article feed, the preference file and the
//! thumbnail loader, recording how the screen drives them.

use std::collections::{HashMap, HashSet};

use rhre_core::error::{Result, RhreError};
use rhre_news::{Article, ArticleSource, FetchState, PreferenceStore, ThumbnailFetcher};

/// Creates `count` articles with ids `news-0`, `news-1`, ...
///
/// Even-numbered articles carry a thumbnail URL and a link; odd-numbered
/// ones have neither.
pub fn sample_articles(count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| {
            let article = Article::new(
                format!("news-{}", i),
                format!("Article {}", i),
                format!("Body of article {}", i),
            )
            .with_published_date(format!("2019-03-{:02}", i % 28 + 1));

            if i % 2 == 0 {
                article
                    .with_thumbnail(format!("https://thumbs.test/{}.png", i))
                    .with_url(format!("https://news.test/{}", i))
            } else {
                article
            }
        })
        .collect()
}

/// Article source whose state and articles are set by the test.
#[derive(Debug, Clone)]
pub struct StubArticleSource {
    pub state: FetchState,
    pub articles: Vec<Article>,
    pub fetch_count: usize,
}

impl StubArticleSource {
    /// A source with a fetch in progress and no articles.
    pub fn fetching() -> Self {
        Self {
            state: FetchState::Fetching,
            articles: Vec::new(),
            fetch_count: 0,
        }
    }

    /// A source that has finished fetching `articles`.
    pub fn done(articles: Vec<Article>) -> Self {
        Self {
            state: FetchState::Done,
            articles,
            fetch_count: 0,
        }
    }

    /// Completes the pending fetch with `articles`.
    pub fn complete(&mut self, articles: Vec<Article>) {
        self.state = FetchState::Done;
        self.articles = articles;
    }

    /// Fails the pending fetch.
    pub fn fail(&mut self) {
        self.state = FetchState::Error;
    }
}

impl ArticleSource for StubArticleSource {
    fn fetch_state(&self) -> FetchState {
        self.state
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn fetch(&mut self) {
        self.state = FetchState::Fetching;
        self.fetch_count += 1;
    }
}

/// Preferences kept in a map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    pub values: HashMap<String, String>,
    pub flush_count: usize,
    pub fail_flush: bool,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferences holding a single key.
    pub fn with(key: &str, value: &str) -> Self {
        let mut preferences = Self::new();
        preferences.values.insert(key.to_string(), value.to_string());
        preferences
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put_string(&mut self, key: &str, value: Option<&str>) {
        match value {
            Some(value) => {
                self.values.insert(key.to_string(), value.to_string());
            }
            None => {
                self.values.remove(key);
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        if self.fail_flush {
            return Err(RhreError::Preferences("disk full".to_string()));
        }
        self.flush_count += 1;
        Ok(())
    }
}

/// Thumbnail loader recording every call.
#[derive(Debug, Clone, Default)]
pub struct RecordingThumbnails {
    pub cached: HashSet<String>,
    pub requested: Vec<String>,
    pub cancel_count: usize,
    pub remove_count: usize,
    pub fail_requests: bool,
}

impl RecordingThumbnails {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader that already holds the given URLs.
    pub fn with_cached<'a>(urls: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            cached: urls.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }
}

impl ThumbnailFetcher for RecordingThumbnails {
    fn is_cached(&self, url: &str) -> bool {
        self.cached.contains(url)
    }

    fn request(&mut self, url: &str) -> Result<()> {
        if self.fail_requests {
            return Err(RhreError::Thumbnail(format!("cannot load {}", url)));
        }
        self.requested.push(url.to_string());
        Ok(())
    }

    fn cancel_all(&mut self) {
        self.cancel_count += 1;
    }

    fn remove_all(&mut self) {
        self.remove_count += 1;
        self.cached.clear();
    }
}
