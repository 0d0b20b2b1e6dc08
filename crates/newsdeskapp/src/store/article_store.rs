use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{NewsError, Result};
use crate::model::Article;
use uuid::Uuid;

pub struct ArticleStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> ArticleStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    fn decode(id: &Uuid, raw: &str) -> Result<Article> {
        let article: Article = serde_json::from_str(raw)?;
        if article.id != *id {
            return Err(NewsError::Store(format!(
                "Document {} holds article {}",
                id, article.id
            )));
        }
        Ok(article)
    }
}

impl<B: StorageBackend> DataStore for ArticleStore<B> {
    fn save_article(&mut self, article: &Article) -> Result<()> {
        let document = serde_json::to_string_pretty(article)?;
        self.backend.write_document(&article.id, &document)
    }

    fn get_article(&self, id: &Uuid) -> Result<Article> {
        let raw = self
            .backend
            .read_document(id)?
            .ok_or_else(|| NewsError::ArticleNotFound(id.to_string()))?;
        Self::decode(id, &raw)
    }

    fn list_articles(&self) -> Result<Vec<Article>> {
        let mut articles = Vec::new();

        for id in self.backend.list_document_ids()? {
            // Deleted between listing and reading
            let Some(raw) = self.backend.read_document(&id)? else {
                continue;
            };
            match Self::decode(&id, &raw) {
                Ok(article) => articles.push(article),
                Err(err) => tracing::warn!(%id, error = %err, "skipping unreadable article document"),
            }
        }

        Ok(articles)
    }

    fn delete_article(&mut self, id: &Uuid) -> Result<()> {
        if !self.backend.delete_document(id)? {
            return Err(NewsError::ArticleNotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArticleDraft;
    use crate::store::mem_backend::MemBackend;

    fn make_store() -> ArticleStore<MemBackend> {
        ArticleStore::with_backend(MemBackend::new())
    }

    fn article(title: &str) -> Article {
        Article::new(ArticleDraft {
            title: title.to_string(),
            description: format!("Body of {}", title),
            thumbnail: "https://img.example.com/t.jpg".into(),
            video_link: None,
            image_source: "N/A".into(),
            category: "World".into(),
            sub_category: None,
            author: "Admin".into(),
            keywords: vec![],
        })
    }

    // --- Basic CRUD Tests ---

    #[test]
    fn test_save_and_get_article() {
        let mut store = make_store();

        let article = article("Ceasefire talks resume");
        store.save_article(&article).unwrap();

        let retrieved = store.get_article(&article.id).unwrap();
        assert_eq!(retrieved, article);
    }

    #[test]
    fn test_save_replaces_existing_document() {
        let mut store = make_store();

        let mut article = article("Draft headline");
        store.save_article(&article).unwrap();
        article.title = "Final headline".into();
        store.save_article(&article).unwrap();

        assert_eq!(store.list_articles().unwrap().len(), 1);
        assert_eq!(
            store.get_article(&article.id).unwrap().title,
            "Final headline"
        );
    }

    #[test]
    fn test_delete_removes_article() {
        let mut store = make_store();

        let article = article("To Delete");
        store.save_article(&article).unwrap();
        store.delete_article(&article.id).unwrap();

        assert!(matches!(
            store.get_article(&article.id),
            Err(NewsError::ArticleNotFound(_))
        ));
        assert!(store.backend.read_document(&article.id).unwrap().is_none());
    }

    // --- Error Handling Tests ---

    #[test]
    fn test_get_nonexistent_article_is_not_found() {
        let store = make_store();
        let id = Uuid::new_v4();
        match store.get_article(&id) {
            Err(NewsError::ArticleNotFound(missing)) => assert_eq!(missing, id.to_string()),
            other => panic!("Expected ArticleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_nonexistent_article_is_not_found() {
        let mut store = make_store();
        let result = store.delete_article(&Uuid::new_v4());
        assert!(matches!(result, Err(NewsError::ArticleNotFound(_))));
    }

    #[test]
    fn test_save_fails_on_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);

        let mut store = ArticleStore::with_backend(backend);
        let result = store.save_article(&article("Test"));
        assert!(matches!(result, Err(NewsError::Store(_))));
    }

    #[test]
    fn test_list_skips_corrupt_documents() {
        let mut store = make_store();
        store.save_article(&article("Readable")).unwrap();
        store.backend.insert_raw(Uuid::new_v4(), "{ not json");

        let articles = store.list_articles().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Readable");
    }

    #[test]
    fn test_get_corrupt_document_is_an_error() {
        let store = make_store();
        let id = Uuid::new_v4();
        store.backend.insert_raw(id, "{ not json");
        assert!(matches!(
            store.get_article(&id),
            Err(NewsError::Serialization(_))
        ));
    }

    #[test]
    fn test_document_under_wrong_key_is_rejected() {
        let store = make_store();
        let stray = article("Stray");
        let raw = serde_json::to_string(&stray).unwrap();
        let other_id = Uuid::new_v4();
        store.backend.insert_raw(other_id, &raw);

        assert!(matches!(
            store.get_article(&other_id),
            Err(NewsError::Store(_))
        ));
    }
}
