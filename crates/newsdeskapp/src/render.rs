//! Article rendering: markdown bodies to HTML and read-time estimates.

use crate::model::Article;
use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

/// Assumed reading speed used for read-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// An article ready for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub article: Article,
    pub html: String,
    pub read_time_minutes: u32,
}

impl ArticleView {
    pub fn new(article: Article) -> Self {
        let html = markdown_to_html(&article.description);
        let read_time_minutes = read_time_minutes(&article.description);
        Self {
            article,
            html,
            read_time_minutes,
        }
    }
}

pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Minutes needed to read `text`, rounded up. Never less than one.
pub fn read_time_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
