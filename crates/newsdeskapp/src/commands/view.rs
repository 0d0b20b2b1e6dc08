use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::render::ArticleView;
use crate::store::DataStore;

use super::helpers::parse_article_id;

/// Fetches one article by id.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let id = parse_article_id(id)?;
    let article = store.get_article(&id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Article retrieved successfully."));
    Ok(result.with_listed_articles(vec![article]))
}

/// Fetches one article and renders its body for display.
pub fn render<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let mut result = run(store, id)?;
    result.view = result.listed_articles.first().cloned().map(ArticleView::new);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::NewsError;
    use crate::store::memory::fixtures::sample_draft;
    use crate::store::memory::InMemoryStore;
    use uuid::Uuid;

    #[test]
    fn missing_article_is_not_found() {
        let store = InMemoryStore::new();
        let result = run(&store, &Uuid::new_v4().to_string());
        assert!(matches!(result, Err(NewsError::ArticleNotFound(_))));
    }

    #[test]
    fn garbage_id_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, "not-an-id"),
            Err(NewsError::ArticleNotFound(_))
        ));
    }

    #[test]
    fn render_attaches_view() {
        let mut store = InMemoryStore::new();
        let mut draft = sample_draft("Markets rally");
        draft.description = "Shares **rose** sharply.".into();
        let id = create::run(&mut store, draft).unwrap().affected_articles[0].id;

        let result = render(&store, &id.to_string()).unwrap();
        let view = result.view.expect("view");
        assert_eq!(view.article.id, id);
        assert!(view.html.contains("<strong>rose</strong>"));
        assert_eq!(view.read_time_minutes, 1);
    }
}
