use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::parse_article_id;

/// Permanently removes an article.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let id = parse_article_id(id)?;
    let article = store.get_article(&id)?;
    store.delete_article(&id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Article deleted successfully."));
    Ok(result.with_affected_articles(vec![article]))
}
