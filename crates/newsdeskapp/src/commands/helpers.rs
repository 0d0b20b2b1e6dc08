use crate::error::{NewsError, Result};
use crate::model::Article;
use uuid::Uuid;

/// Parses a client-supplied article id.
///
/// Anything that is not a UUID cannot name a stored article, so it is
/// reported as not-found rather than as malformed input.
pub fn parse_article_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| NewsError::ArticleNotFound(raw.to_string()))
}

/// Orders articles newest-first by creation time, ties broken by id.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Unicode-aware case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
