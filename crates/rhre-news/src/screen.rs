//! The news screen state machine.

use std::fmt;

use tracing::{debug, info, warn};

use crate::article::{ArticleSource, FetchState};
use crate::preferences::{PreferenceStore, LAST_NEWS};
use crate::thumbnail::ThumbnailFetcher;
use crate::widgets::{ArticleButton, ArticleView, LinkButton, Pagination, Panel, ARTICLES_PER_PAGE};

/// Screen the back button leaves to.
pub const EDITOR_SCREEN: &str = "editor";

/// What the news screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenState {
    /// The article grid.
    Articles,
    /// One article's detail view.
    InArticle,
    /// The loading indicator.
    Fetching,
    /// The "cannot load" label.
    Error,
}

impl ScreenState {
    /// Panels shown in this state. Every other panel is hidden.
    pub fn panels(self) -> &'static [Panel] {
        match self {
            ScreenState::Articles => &[Panel::ArticleList, Panel::Pagination],
            ScreenState::InArticle => &[Panel::ArticleView, Panel::LinkButton],
            ScreenState::Fetching => &[Panel::Fetching],
            ScreenState::Error => &[Panel::ErrorLabel],
        }
    }
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenState::Articles => write!(f, "articles"),
            ScreenState::InArticle => write!(f, "in_article"),
            ScreenState::Fetching => write!(f, "fetching"),
            ScreenState::Error => write!(f, "error"),
        }
    }
}

/// Result of pressing the back button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Stayed on the news screen and returned to the article grid.
    ShowArticles,
    /// The owner should switch to the named screen.
    ExitTo(&'static str),
}

/// Presenter for the news screen.
///
/// All mutation goes through `&mut self`. Owners that receive fetch
/// notifications on another thread share the screen behind a `Mutex`.
///
/// # Example
///
/// ```
/// use rhre_news::{FetchState, NewsScreen, ScreenState};
/// use rhre_test::news::{
///     sample_articles, InMemoryPreferences, RecordingThumbnails, StubArticleSource,
/// };
///
/// let mut screen = NewsScreen::new(
///     StubArticleSource::fetching(),
///     InMemoryPreferences::new(),
///     RecordingThumbnails::new(),
/// );
/// assert_eq!(screen.state(), ScreenState::Fetching);
///
/// // Later, when the news feed reports completion:
/// screen.source_mut().complete(sample_articles(3));
/// screen.on_fetch_state_changed(FetchState::Done);
/// assert_eq!(screen.state(), ScreenState::Articles);
/// assert!(screen.has_new_news());
///
/// assert!(screen.open_article(0));
/// assert_eq!(screen.article_view().article().id, "news-0");
/// ```
pub struct NewsScreen<A, P, T> {
    source: A,
    preferences: P,
    thumbnails: T,
    state: ScreenState,
    buttons: Vec<ArticleButton>,
    article_view: ArticleView,
    link_button: LinkButton,
    pagination: Pagination,
    has_new_news: bool,
}

impl<A, P, T> NewsScreen<A, P, T>
where
    A: ArticleSource,
    P: PreferenceStore,
    T: ThumbnailFetcher,
{
    /// Creates the screen in the fetching state and starts a fetch.
    pub fn new(source: A, preferences: P, thumbnails: T) -> Self {
        let mut screen = Self {
            source,
            preferences,
            thumbnails,
            state: ScreenState::Fetching,
            buttons: vec![ArticleButton::default(); ARTICLES_PER_PAGE],
            article_view: ArticleView::default(),
            link_button: LinkButton::default(),
            pagination: Pagination::new(0, 0),
            has_new_news: false,
        };
        screen.set_state(ScreenState::Fetching);
        screen.source.fetch();
        screen
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Returns true if the newest article differs from the one last seen.
    pub fn has_new_news(&self) -> bool {
        self.has_new_news
    }

    /// Returns true if `panel` is currently shown.
    pub fn is_visible(&self, panel: Panel) -> bool {
        let shown = self.state.panels().contains(&panel);
        match panel {
            Panel::LinkButton => shown && self.link_button.is_visible(),
            _ => shown,
        }
    }

    pub fn buttons(&self) -> &[ArticleButton] {
        &self.buttons
    }

    pub fn article_view(&self) -> &ArticleView {
        &self.article_view
    }

    pub fn link_button(&self) -> &LinkButton {
        &self.link_button
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn source(&self) -> &A {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut A {
        &mut self.source
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn thumbnails(&self) -> &T {
        &self.thumbnails
    }

    /// Handles a fetch-state change reported by the article source.
    pub fn on_fetch_state_changed(&mut self, new: FetchState) {
        debug!(event = "fetch_state", state = %new);
        match new {
            FetchState::Fetching => {
                self.set_state(ScreenState::Fetching);
                self.clear_buttons();
            }
            FetchState::Done => {
                self.pagination.update(1, self.pagination.total());
                self.set_state(ScreenState::Articles);
                self.check_new_news();
            }
            FetchState::Error => {
                self.set_state(ScreenState::Error);
                self.clear_buttons();
            }
        }
    }

    /// Called when the screen becomes the active screen.
    ///
    /// Retries a failed fetch, then mirrors the source's fetch state.
    pub fn show(&mut self) {
        if self.state == ScreenState::Error {
            self.set_state(ScreenState::Fetching);
            self.source.fetch();
        }

        match self.source.fetch_state() {
            FetchState::Error => self.set_state(ScreenState::Error),
            FetchState::Fetching => self.set_state(ScreenState::Fetching),
            FetchState::Done => self.set_state(ScreenState::Articles),
        }
    }

    /// Discards the shown articles and fetches again.
    pub fn refresh(&mut self) {
        self.set_state(ScreenState::Fetching);
        self.clear_buttons();
        self.source.fetch();
    }

    /// Handles a key press; Ctrl+R refreshes.
    ///
    /// Returns true if the key was consumed.
    pub fn handle_shortcut(&mut self, control_down: bool, key: char) -> bool {
        if control_down && key.eq_ignore_ascii_case(&'r') {
            self.refresh();
            return true;
        }
        false
    }

    /// Handles the back button.
    pub fn back(&mut self) -> BackAction {
        if self.state == ScreenState::InArticle {
            self.set_state(ScreenState::Articles);
            BackAction::ShowArticles
        } else {
            BackAction::ExitTo(EDITOR_SCREEN)
        }
    }

    /// Opens the article shown on the button at `slot`.
    ///
    /// Only visible buttons of the article grid can be clicked; returns
    /// false and leaves the screen unchanged otherwise.
    pub fn open_article(&mut self, slot: usize) -> bool {
        if self.state != ScreenState::Articles {
            return false;
        }
        let Some(article) = self
            .buttons
            .get(slot)
            .filter(|button| button.is_visible())
            .and_then(|button| button.article())
            .cloned()
        else {
            return false;
        };

        self.link_button.prep(&article);
        self.article_view.prep(article);
        self.set_state(ScreenState::InArticle);
        true
    }

    /// Returns the link to open when the link button is clicked.
    pub fn open_link(&self) -> Option<&str> {
        if !self.is_visible(Panel::LinkButton) {
            return None;
        }
        self.link_button.link()
    }

    /// Moves to the next page of articles, if there is one.
    pub fn next_page(&mut self) -> bool {
        if self.state != ScreenState::Articles || !self.pagination.right_visible() {
            return false;
        }
        self.pagination
            .update(self.pagination.current() + 1, self.pagination.total());
        self.populate_articles();
        true
    }

    /// Moves to the previous page of articles, if there is one.
    pub fn previous_page(&mut self) -> bool {
        if self.state != ScreenState::Articles || !self.pagination.left_visible() {
            return false;
        }
        self.pagination
            .update(self.pagination.current() - 1, self.pagination.total());
        self.populate_articles();
        true
    }

    /// Marks a requested thumbnail as loaded.
    pub fn on_thumbnail_ready(&mut self, url: &str) {
        for button in &mut self.buttons {
            button.thumbnail_ready(url);
        }
    }

    /// Shows the placeholder for a thumbnail that failed to load.
    pub fn on_thumbnail_failed(&mut self, url: &str, error: &dyn fmt::Display) {
        let mut changed = false;
        for button in &mut self.buttons {
            changed |= button.thumbnail_failed(url);
        }
        if changed {
            warn!(event = "thumbnail_failed", url, error = %error);
        }
    }

    /// Cancels and drops every thumbnail.
    pub fn dispose(&mut self) {
        self.thumbnails.cancel_all();
        self.thumbnails.remove_all();
    }

    fn set_state(&mut self, state: ScreenState) {
        let previous = std::mem::replace(&mut self.state, state);
        if state == ScreenState::Articles {
            self.populate_articles();
        }
        info!(event = "state_changed", from = %previous, to = %state);
    }

    fn populate_articles(&mut self) {
        let articles = self.source.articles();
        let total = Pagination::page_count(articles.len());
        let current = self.pagination.current().clamp(1, total);
        self.pagination.update(current, total);

        let offset = self.pagination.offset();
        for (slot, button) in self.buttons.iter_mut().enumerate() {
            let article = articles.get(offset + slot).cloned();
            button.assign(article, &mut self.thumbnails);
        }
    }

    fn clear_buttons(&mut self) {
        for button in &mut self.buttons {
            button.assign(None, &mut self.thumbnails);
        }
    }

    fn check_new_news(&mut self) {
        let newest = self.source.articles().first().map(|article| article.id.clone());
        self.has_new_news = match self.preferences.get_string(LAST_NEWS) {
            None => true,
            Some(last) => newest.as_deref() != Some(last.as_str()),
        };

        self.preferences.put_string(LAST_NEWS, newest.as_deref());
        if let Err(e) = self.preferences.flush() {
            warn!(event = "preferences_flush_failed", error = %e);
        }
    }
}
