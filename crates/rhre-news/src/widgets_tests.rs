//! Tests for the news screen widget models.

use std::collections::HashSet;

use rhre_core::error::{Result, RhreError};

use crate::article::Article;
use crate::thumbnail::{Thumbnail, ThumbnailFetcher};
use crate::widgets::*;

#[derive(Default)]
struct FakeThumbnails {
    cached: HashSet<String>,
    requested: Vec<String>,
    failing: bool,
}

impl ThumbnailFetcher for FakeThumbnails {
    fn is_cached(&self, url: &str) -> bool {
        self.cached.contains(url)
    }

    fn request(&mut self, url: &str) -> Result<()> {
        if self.failing {
            return Err(RhreError::Thumbnail(format!("{} unreachable", url)));
        }
        self.requested.push(url.to_string());
        Ok(())
    }

    fn cancel_all(&mut self) {}

    fn remove_all(&mut self) {}
}

#[test]
fn test_page_count() {
    assert_eq!(Pagination::page_count(0), 1);
    assert_eq!(Pagination::page_count(1), 1);
    assert_eq!(Pagination::page_count(9), 1);
    assert_eq!(Pagination::page_count(10), 2);
    assert_eq!(Pagination::page_count(27), 3);
}

#[test]
fn test_pagination_arrows() {
    let first = Pagination::new(1, 3);
    assert!(!first.left_visible());
    assert!(first.right_visible());
    assert_eq!(first.offset(), 0);

    let middle = Pagination::new(2, 3);
    assert!(middle.left_visible());
    assert!(middle.right_visible());
    assert_eq!(middle.offset(), 9);

    let last = Pagination::new(3, 3);
    assert!(last.left_visible());
    assert!(!last.right_visible());
    assert_eq!(last.label_args(), [3, 3]);
}

#[test]
fn test_pagination_initially_hides_arrows() {
    let pagination = Pagination::new(0, 0);
    assert!(!pagination.left_visible());
    assert!(!pagination.right_visible());
    assert_eq!(pagination.offset(), 0);
}

#[test]
fn test_article_view_text() {
    let mut view = ArticleView::default();
    assert_eq!(view.article(), &Article::blank());

    view.prep(Article::new("a1", "Title", "Body text").with_published_date("2019-01-01"));
    assert_eq!(view.text(), "2019-01-01\nTitle\n\nBody text");
    assert_eq!(view.article().id, "a1");
}

#[test]
fn test_link_button_title_fallbacks() {
    let mut button = LinkButton::default();

    button.prep(&Article::new("a", "t", "b"));
    assert!(!button.is_visible());
    assert_eq!(button.title(), "");
    assert_eq!(button.link(), None);

    button.prep(&Article::new("a", "t", "b").with_url("https://example.com"));
    assert!(button.is_visible());
    assert_eq!(button.title(), "https://example.com");

    button.prep(
        &Article::new("a", "t", "b")
            .with_url("https://example.com")
            .with_url_title("Read more"),
    );
    assert_eq!(button.title(), "Read more");
    assert_eq!(button.link(), Some("https://example.com"));
}

#[test]
fn test_button_blank_thumbnail_uses_placeholder() {
    let mut thumbnails = FakeThumbnails::default();
    let mut button = ArticleButton::default();

    button.assign(Some(Article::new("a", "News", "")), &mut thumbnails);
    assert!(button.is_visible());
    assert_eq!(button.title(), "News");
    assert_eq!(button.thumbnail(), &Thumbnail::Placeholder);
    assert!(thumbnails.requested.is_empty());
}

#[test]
fn test_button_cached_thumbnail_is_ready() {
    let mut thumbnails = FakeThumbnails::default();
    thumbnails.cached.insert("https://img/1.png".to_string());
    let mut button = ArticleButton::default();

    button.assign(
        Some(Article::new("a", "News", "").with_thumbnail("https://img/1.png")),
        &mut thumbnails,
    );
    assert_eq!(
        button.thumbnail(),
        &Thumbnail::Ready("https://img/1.png".to_string())
    );
    assert!(thumbnails.requested.is_empty());
}

#[test]
fn test_button_requests_missing_thumbnail() {
    let mut thumbnails = FakeThumbnails::default();
    let mut button = ArticleButton::default();

    button.assign(
        Some(Article::new("a", "News", "").with_thumbnail("https://img/2.png")),
        &mut thumbnails,
    );
    assert!(button.thumbnail().is_pending());
    assert_eq!(thumbnails.requested, vec!["https://img/2.png".to_string()]);

    assert!(!button.thumbnail_ready("https://img/other.png"));
    assert!(button.thumbnail_ready("https://img/2.png"));
    assert_eq!(button.thumbnail().url(), Some("https://img/2.png"));
    assert!(!button.thumbnail().is_pending());
}

#[test]
fn test_button_request_error_uses_placeholder() {
    let mut thumbnails = FakeThumbnails {
        failing: true,
        ..FakeThumbnails::default()
    };
    let mut button = ArticleButton::default();

    button.assign(
        Some(Article::new("a", "News", "").with_thumbnail("https://img/3.png")),
        &mut thumbnails,
    );
    assert_eq!(button.thumbnail(), &Thumbnail::Placeholder);
}

#[test]
fn test_stale_thumbnail_ignored() {
    let mut thumbnails = FakeThumbnails::default();
    let mut button = ArticleButton::default();

    button.assign(
        Some(Article::new("a", "Old", "").with_thumbnail("https://img/old.png")),
        &mut thumbnails,
    );
    button.assign(
        Some(Article::new("b", "New", "").with_thumbnail("https://img/new.png")),
        &mut thumbnails,
    );

    assert!(!button.thumbnail_ready("https://img/old.png"));
    assert_eq!(
        button.thumbnail(),
        &Thumbnail::Pending("https://img/new.png".to_string())
    );
}

#[test]
fn test_button_cleared() {
    let mut thumbnails = FakeThumbnails::default();
    let mut button = ArticleButton::default();

    button.assign(Some(Article::new("a", "News", "")), &mut thumbnails);
    button.assign(None, &mut thumbnails);
    assert!(!button.is_visible());
    assert!(button.article().is_none());
}

#[test]
fn test_thumbnail_failed_falls_back() {
    let mut thumbnails = FakeThumbnails::default();
    let mut button = ArticleButton::default();

    button.assign(
        Some(Article::new("a", "News", "").with_thumbnail("https://img/4.png")),
        &mut thumbnails,
    );
    assert!(button.thumbnail_failed("https://img/4.png"));
    assert_eq!(button.thumbnail(), &Thumbnail::Placeholder);
    assert!(!button.thumbnail_failed("https://img/4.png"));
}
