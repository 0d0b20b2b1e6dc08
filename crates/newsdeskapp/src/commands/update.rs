use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ArticleDraft;
use crate::store::DataStore;

use super::helpers::parse_article_id;

/// Replaces every editable field of an existing article.
///
/// The id and `created_at` are preserved; `updated_at` moves forward.
pub fn run<S: DataStore>(store: &mut S, id: &str, draft: ArticleDraft) -> Result<CmdResult> {
    let id = parse_article_id(id)?;
    let mut article = store.get_article(&id)?;
    article.apply(draft);
    store.save_article(&article)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Article updated successfully."));
    Ok(result.with_affected_articles(vec![article]))
}
