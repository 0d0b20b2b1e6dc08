use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NewsError, Result};
use crate::model::Article;
use crate::store::DataStore;
use crate::validation::FieldError;
use regex::{Regex, RegexBuilder};

use super::helpers::{eq_ignore_case, sort_newest_first};

/// Criteria for listing articles. Every set criterion must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Exact category name, case-insensitive.
    pub category: Option<String>,
    /// Exact subcategory name, case-insensitive.
    pub sub_category: Option<String>,
    /// Free-text query matched against the searchable fields.
    pub search: Option<String>,
}

impl ArticleFilter {
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            category: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn sub_category(name: impl Into<String>) -> Self {
        Self {
            sub_category: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Default::default()
        }
    }
}

/// A compiled search query.
///
/// Words of the query must appear in order, separated by any run of
/// whitespace, anywhere inside one searchable field. Matching ignores case and
/// treats the query text literally.
#[derive(Debug, Clone)]
pub struct SearchPattern(Regex);

impl SearchPattern {
    /// Compiles a query. Blank queries yield `None` and filter nothing.
    pub fn parse(query: &str) -> Result<Option<Self>> {
        let words: Vec<String> = query.split_whitespace().map(regex::escape).collect();
        if words.is_empty() {
            return Ok(None);
        }
        let regex = RegexBuilder::new(&words.join(r"\s+"))
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                NewsError::Validation(vec![FieldError::new(
                    "search",
                    format!("Search query too complex: {}", e),
                )])
            })?;
        Ok(Some(Self(regex)))
    }

    pub fn matches(&self, article: &Article) -> bool {
        article.searchable_fields().any(|field| self.0.is_match(field))
    }
}

fn field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted.map(str::trim).filter(|w| !w.is_empty()) {
        None => true,
        Some(wanted) => actual.is_some_and(|a| eq_ignore_case(a.trim(), wanted)),
    }
}

/// Lists articles matching `filter`, newest first.
pub fn run<S: DataStore>(store: &S, filter: &ArticleFilter) -> Result<CmdResult> {
    let articles = filter_articles(store, filter)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Articles retrieved successfully."));
    Ok(result.with_listed_articles(articles))
}

pub(crate) fn filter_articles<S: DataStore>(
    store: &S,
    filter: &ArticleFilter,
) -> Result<Vec<Article>> {
    let pattern = match filter.search.as_deref() {
        Some(query) => SearchPattern::parse(query)?,
        None => None,
    };

    let mut articles: Vec<Article> = store
        .list_articles()?
        .into_iter()
        .filter(|a| field_matches(filter.category.as_deref(), Some(&a.category)))
        .filter(|a| field_matches(filter.sub_category.as_deref(), a.sub_category.as_deref()))
        .filter(|a| pattern.as_ref().is_none_or(|p| p.matches(a)))
        .collect();

    sort_newest_first(&mut articles);
    Ok(articles)
}
