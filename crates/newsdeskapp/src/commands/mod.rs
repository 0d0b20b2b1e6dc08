//! # Command Layer
//!
//! This module contains the **core business logic** of newsdesk. Each command
//! lives in its own submodule and implements plain Rust functions over a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on [`Article`] and [`ArticleDraft`](crate::model::ArticleDraft) values
//! - Return structured [`CmdResult`] with affected/listed articles and messages
//! - Are completely transport-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Input validation**: commands receive validated drafts and parsed ids;
//!   the API facade owns that boundary
//! - **Authorization**: checked by the API facade before a command runs
//! - **HTTP concerns**: no status codes, headers or envelopes
//!
//! ## Command Modules
//!
//! - [`create`]: Persist a new article
//! - [`view`]: Fetch one article, optionally rendered
//! - [`get`]: List and search articles
//! - [`update`]: Replace an article's editable fields
//! - [`delete`]: Remove an article permanently
//! - [`category`]: Category and subcategory pages
//! - [`helpers`]: Shared utilities (id parsing, ordering)

use crate::categories::CategoryMatch;
use crate::model::Article;
use crate::render::ArticleView;
use serde::Serialize;

pub mod category;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_articles: Vec<Article>,
    pub listed_articles: Vec<Article>,
    pub view: Option<ArticleView>,
    pub category: Option<CategoryMatch>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_articles(mut self, articles: Vec<Article>) -> Self {
        self.affected_articles = articles;
        self
    }

    pub fn with_listed_articles(mut self, articles: Vec<Article>) -> Self {
        self.listed_articles = articles;
        self
    }

    /// The first message, used as the headline of a response.
    pub fn summary(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}
