//! Widget models of the news screen.
//!
//! These hold what each widget displays; drawing them is the UI layer's job.

use tracing::{debug, warn};

use crate::article::Article;
use crate::thumbnail::{Thumbnail, ThumbnailFetcher};

/// Number of article buttons, laid out as a 3x3 grid.
pub const ARTICLES_PER_PAGE: usize = 9;

/// Localization key of the screen title.
pub const TITLE_KEY: &str = "screen.news.title";
/// Localization key of the text under the loading icon.
pub const FETCHING_KEY: &str = "screen.news.fetching";
/// Localization key of the error label.
pub const CANNOT_LOAD_KEY: &str = "screen.news.cannotLoad";
/// Localization key of the page label, formatted with `(current, total)`.
pub const PAGE_KEY: &str = "screen.news.page";

/// Top-level panels whose visibility depends on the screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    ArticleList,
    Pagination,
    ArticleView,
    LinkButton,
    Fetching,
    ErrorLabel,
}

/// One cell of the article grid.
#[derive(Debug, Clone, Default)]
pub struct ArticleButton {
    article: Option<Article>,
    title: String,
    thumbnail: Thumbnail,
    visible: bool,
}

impl ArticleButton {
    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    /// Buttons are only visible while they hold an article.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows `article` on this button, requesting its thumbnail if needed.
    pub(crate) fn assign<T>(&mut self, article: Option<Article>, thumbnails: &mut T)
    where
        T: ThumbnailFetcher + ?Sized,
    {
        if let Some(article) = &article {
            self.title = article.title.clone();
            self.thumbnail = thumbnail_for(article, thumbnails);
        }
        self.visible = article.is_some();
        self.article = article;
    }

    /// Marks the thumbnail at `url` as loaded if this button still shows it.
    ///
    /// Returns true if the button changed.
    pub(crate) fn thumbnail_ready(&mut self, url: &str) -> bool {
        let still_shown = self
            .article
            .as_ref()
            .is_some_and(|article| article.thumbnail.trim() == url);
        if still_shown && self.thumbnail == Thumbnail::Pending(url.to_string()) {
            self.thumbnail = Thumbnail::Ready(url.to_string());
            return true;
        }
        false
    }

    /// Falls back to the placeholder if the thumbnail at `url` failed to load.
    pub(crate) fn thumbnail_failed(&mut self, url: &str) -> bool {
        if self.thumbnail == Thumbnail::Pending(url.to_string()) {
            self.thumbnail = Thumbnail::Placeholder;
            return true;
        }
        false
    }
}

fn thumbnail_for<T>(article: &Article, thumbnails: &mut T) -> Thumbnail
where
    T: ThumbnailFetcher + ?Sized,
{
    let url = article.thumbnail.trim();
    if url.is_empty() {
        return Thumbnail::Placeholder;
    }
    if thumbnails.is_cached(url) {
        return Thumbnail::Ready(url.to_string());
    }

    match thumbnails.request(url) {
        Ok(()) => {
            debug!(event = "thumbnail_requested", url, article = %article.id);
            Thumbnail::Pending(url.to_string())
        }
        Err(e) => {
            warn!(event = "thumbnail_failed", url, error = %e);
            Thumbnail::Placeholder
        }
    }
}

/// Detail view of the selected article.
#[derive(Debug, Clone, Default)]
pub struct ArticleView {
    article: Article,
    text: String,
}

impl ArticleView {
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// The text body: date, title, a blank line, then the article body.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn prep(&mut self, article: Article) {
        self.text = format!(
            "{}\n{}\n\n{}",
            article.published_date, article.title, article.body
        );
        self.article = article;
    }
}

/// Button opening the selected article's link.
#[derive(Debug, Clone, Default)]
pub struct LinkButton {
    title: String,
    link: Option<String>,
}

impl LinkButton {
    /// The URL title, falling back to the URL itself.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Shown only for articles with a link.
    pub fn is_visible(&self) -> bool {
        self.link.is_some()
    }

    pub(crate) fn prep(&mut self, article: &Article) {
        self.title = article
            .url_title
            .clone()
            .or_else(|| article.url.clone())
            .unwrap_or_default();
        self.link = article.url.clone();
    }
}

/// Page indicator with previous/next arrows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    total: usize,
}

impl Pagination {
    /// Creates an indicator at page `current` of `total`.
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    /// Number of pages needed for `article_count` articles, never below one.
    pub fn page_count(article_count: usize) -> usize {
        article_count.div_ceil(ARTICLES_PER_PAGE).max(1)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Arguments for the [`PAGE_KEY`] label.
    pub fn label_args(&self) -> [usize; 2] {
        [self.current, self.total]
    }

    pub fn left_visible(&self) -> bool {
        self.current > 1
    }

    pub fn right_visible(&self) -> bool {
        self.current < self.total
    }

    /// Index of the first article on the current page.
    pub fn offset(&self) -> usize {
        self.current.saturating_sub(1) * ARTICLES_PER_PAGE
    }

    pub(crate) fn update(&mut self, current: usize, total: usize) {
        self.current = current;
        self.total = total;
    }
}
