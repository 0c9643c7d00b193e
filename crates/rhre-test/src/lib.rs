//! Shared test fixtures for RHRE crates.
//!
//! This crate provides data types and in-memory collaborators for testing.
//!
//! - [`entity`] - Editor entity with configurable bounds
//! - [`news`] - Sample articles and doubles for the news screen collaborators
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rhre-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use rhre_test::entity::TestEntity;
//! use rhre_test::news::{sample_articles, StubArticleSource};
//! ```

pub mod entity;
pub mod news;

// Re-export commonly used types at crate root for convenience
pub use entity::TestEntity;
pub use news::{sample_articles, InMemoryPreferences, RecordingThumbnails, StubArticleSource};
