use crate::categories::{self, CategoryMatch};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NewsError, Result};
use crate::store::DataStore;

use super::get::{filter_articles, ArticleFilter};

/// Lists the articles on a category page, newest first.
///
/// The slug is resolved against the registry. A top-level category page shows
/// articles in that category; a subcategory page shows articles tagged with
/// that subcategory.
pub fn run<S: DataStore>(store: &S, slug: &str) -> Result<CmdResult> {
    let found =
        categories::resolve(slug).ok_or_else(|| NewsError::CategoryNotFound(slug.to_string()))?;

    let filter = match found {
        CategoryMatch::TopLevel(category) => ArticleFilter::category(category.name),
        CategoryMatch::Sub { sub, .. } => ArticleFilter::sub_category(sub.name),
    };
    let articles = filter_articles(store, &filter)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Articles in {} retrieved successfully.",
        found.name()
    )));
    result.category = Some(found);
    Ok(result.with_listed_articles(articles))
}
