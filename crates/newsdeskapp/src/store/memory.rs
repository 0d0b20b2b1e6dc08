use super::article_store::ArticleStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = ArticleStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ArticleStore::with_backend(MemBackend::new())
    }

    /// Makes every subsequent write fail, to exercise error paths.
    pub fn fail_writes(&self, fail: bool) {
        self.backend.set_simulate_write_error(fail);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Article, ArticleDraft};
    use crate::store::DataStore;
    use chrono::{Duration, Utc};

    /// A valid draft with the given title and neutral values elsewhere.
    pub fn sample_draft(title: &str) -> ArticleDraft {
        ArticleDraft {
            title: title.to_string(),
            description: format!("Coverage of {}.", title.to_lowercase()),
            thumbnail: "https://img.example.com/lead.jpg".to_string(),
            video_link: None,
            image_source: "Staff photographer".to_string(),
            category: "World".to_string(),
            sub_category: None,
            author: "Newsroom".to_string(),
            keywords: Vec::new(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        // Each inserted article is one minute newer than the previous one.
        clock: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                clock: 0,
            }
        }

        pub fn with_articles(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = sample_draft(&format!("Test Article {}", i + 1));
                self.insert(draft);
            }
            self
        }

        pub fn with_article(mut self, title: &str, category: &str) -> Self {
            let mut draft = sample_draft(title);
            draft.category = category.to_string();
            self.insert(draft);
            self
        }

        /// Inserts a fully customized draft.
        pub fn with_draft(mut self, draft: ArticleDraft) -> Self {
            self.insert(draft);
            self
        }

        fn insert(&mut self, draft: ArticleDraft) -> Article {
            let mut article = Article::new(draft);
            let stamp = Utc::now() - Duration::days(1) + Duration::minutes(self.clock);
            article.created_at = stamp;
            article.updated_at = stamp;
            self.clock += 1;
            self.store.save_article(&article).unwrap();
            article
        }
    }
}
