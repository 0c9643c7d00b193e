//! News screen presenter for the editor.
//!
//! The news screen shows articles published by the editor's news feed. This
//! crate holds the screen's state machine without any rendering: which panels
//! are visible, which article each of the nine grid buttons shows, the detail
//! view of the selected article, and pagination.
//!
//! The screen talks to three collaborators through traits:
//! - [`ArticleSource`]: fetches the article list and reports its fetch state
//! - [`PreferenceStore`]: remembers the newest article already seen
//! - [`ThumbnailFetcher`]: loads and caches article thumbnails
//!
//! Fetch-state changes are pushed into the screen by the owner with
//! [`NewsScreen::on_fetch_state_changed`]; completed thumbnails with
//! [`NewsScreen::on_thumbnail_ready`].
//!
//! Logging levels:
//! - **INFO**: Screen state changes
//! - **DEBUG**: Fetch-state notifications, thumbnail requests
//! - **WARN**: Thumbnail and preference failures

mod article;
mod preferences;
mod screen;
mod thumbnail;
mod widgets;

#[cfg(test)]
mod widgets_tests;

pub use article::{Article, ArticleSource, FetchState};
pub use preferences::{PreferenceStore, LAST_NEWS};
pub use screen::{BackAction, NewsScreen, ScreenState, EDITOR_SCREEN};
pub use thumbnail::{Thumbnail, ThumbnailFetcher};
pub use widgets::{
    ArticleButton, ArticleView, LinkButton, Pagination, Panel, ARTICLES_PER_PAGE,
    CANNOT_LOAD_KEY, FETCHING_KEY, PAGE_KEY, TITLE_KEY,
};
