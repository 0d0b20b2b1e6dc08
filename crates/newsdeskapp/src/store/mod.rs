//! # Storage Layer
//!
//! This module defines the storage abstraction for newsdesk. The [`DataStore`]
//! trait lets the rest of the application work against any article collection.
//!
//! ## Document Collection
//!
//! Articles are stored as one self-contained JSON document per record. There
//! is no separate index: listing reads every document in the collection.
//!
//! ### Split of Responsibilities
//! - [`backend::StorageBackend`]: raw document I/O keyed by UUID (the "how").
//! - [`article_store::ArticleStore`]: (de)serialization, not-found semantics,
//!   and tolerance of unreadable documents (the "what").
//!
//! ## Failure Behavior
//!
//! - A missing document is [`NewsError::ArticleNotFound`](crate::error::NewsError).
//! - A document that fails to parse is skipped by `list_articles` with a
//!   warning, but is an error for `get_article`.
//! - Writes replace the whole document atomically; concurrent writers are not
//!   coordinated, so the last write wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store under a data directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! └── articles/
//!     └── article-{uuid}.json
//! ```

use crate::error::Result;
use crate::model::Article;
use uuid::Uuid;

pub mod article_store;
pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for article storage.
pub trait DataStore {
    /// Save an article (create or replace)
    fn save_article(&mut self, article: &Article) -> Result<()>;

    /// Get an article by ID
    fn get_article(&self, id: &Uuid) -> Result<Article>;

    /// List every readable article, in no particular order
    fn list_articles(&self) -> Result<Vec<Article>>;

    /// Delete an article permanently
    fn delete_article(&mut self, id: &Uuid) -> Result<()>;
}

impl<S: DataStore + ?Sized> DataStore for Box<S> {
    fn save_article(&mut self, article: &Article) -> Result<()> {
        (**self).save_article(article)
    }

    fn get_article(&self, id: &Uuid) -> Result<Article> {
        (**self).get_article(id)
    }

    fn list_articles(&self) -> Result<Vec<Article>> {
        (**self).list_articles()
    }

    fn delete_article(&mut self, id: &Uuid) -> Result<()> {
        (**self).delete_article(id)
    }
}
