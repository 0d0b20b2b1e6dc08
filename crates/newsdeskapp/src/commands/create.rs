use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Article, ArticleDraft};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, draft: ArticleDraft) -> Result<CmdResult> {
    let article = Article::new(draft);
    store.save_article(&article)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Article created successfully."));
    Ok(result.with_affected_articles(vec![article]))
}
