//! Plain-text output for the terminal commands.

use newsdeskapp::categories::Category;
use newsdeskapp::render::ArticleView;
use std::fmt::Write;

/// The category tree, one entry per line, subcategories indented.
pub fn category_tree(categories: &[Category]) -> String {
    let width = categories
        .iter()
        .flat_map(|c| {
            std::iter::once(c.name.len()).chain(c.sub_categories.iter().map(|s| s.name.len() + 2))
        })
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{:<width$}  {}", category.name, category.path);
        for sub in category.sub_categories {
            let name = format!("  {}", sub.name);
            let _ = writeln!(out, "{:<width$}  {}", name, sub.path);
        }
    }
    out
}

/// Header lines plus the rendered (or raw) body.
pub fn article(view: &ArticleView, raw: bool) -> String {
    let article = &view.article;
    let mut section = article.category.clone();
    if let Some(sub) = &article.sub_category {
        let _ = write!(section, " / {}", sub);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", article.title);
    let _ = writeln!(
        out,
        "{} | by {} | {} | {} min read",
        section,
        article.author,
        article.created_at.format("%Y-%m-%d"),
        view.read_time_minutes
    );
    if !article.keywords.is_empty() {
        let _ = writeln!(out, "Keywords: {}", article.keywords.join(", "));
    }
    out.push('\n');
    if raw {
        out.push_str(&article.description);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    } else {
        out.push_str(&view.html);
    }
    out
}
