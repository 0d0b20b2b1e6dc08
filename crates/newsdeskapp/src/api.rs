//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all newsdesk operations, whether they arrive over HTTP or
//! from the command line.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Authorizes** writes that require an admin [`Caller`]
//! - **Validates** raw [`ArticleInput`] into an [`ArticleDraft`](crate::model::ArticleDraft)
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Transport concerns**: no status codes, headers or body parsing
//! - **Presentation**: returns data structures, not strings
//!
//! ## Ordering Guarantees
//!
//! Authorization runs before validation, and both run before the store is
//! touched. A forbidden or invalid request never reads or writes a document.
//!
//! ## Generic Over DataStore
//!
//! `NewsApi<S: DataStore>` is generic over the storage backend:
//! - Production: `NewsApi<FileStore>` or a boxed `dyn DataStore`
//! - Testing: `NewsApi<InMemoryStore>`

use crate::commands::{self, get::ArticleFilter, CmdResult};
use crate::config::NewsConfig;
use crate::error::{NewsError, Result};
use crate::model::ArticleInput;
use crate::store::DataStore;
use crate::validation::{validate_input, DraftDefaults, ValidationPolicy};

/// Who is making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Admin,
    Anonymous,
}

impl Caller {
    pub fn is_admin(self) -> bool {
        self == Caller::Admin
    }
}

/// The main API facade for newsdesk operations.
pub struct NewsApi<S: DataStore> {
    store: S,
    policy: ValidationPolicy,
    defaults: DraftDefaults,
}

impl<S: DataStore> NewsApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: ValidationPolicy::default(),
            defaults: DraftDefaults::default(),
        }
    }

    pub fn from_config(store: S, config: &NewsConfig) -> Self {
        Self {
            store,
            policy: config.validation_policy(),
            defaults: config.draft_defaults(),
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn create_article(&mut self, caller: Caller, input: ArticleInput) -> Result<CmdResult> {
        require_admin(caller, "create articles")?;
        let draft =
            validate_input(input, Some(&self.defaults), &self.policy).map_err(NewsError::Validation)?;
        commands::create::run(&mut self.store, draft)
    }

    pub fn get_article(&self, id: &str) -> Result<CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn view_article(&self, id: &str) -> Result<CmdResult> {
        commands::view::render(&self.store, id)
    }

    pub fn list_articles(&self, filter: &ArticleFilter) -> Result<CmdResult> {
        commands::get::run(&self.store, filter)
    }

    pub fn update_article(&mut self, id: &str, input: ArticleInput) -> Result<CmdResult> {
        let draft = validate_input(input, None, &self.policy).map_err(NewsError::Validation)?;
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete_article(&mut self, caller: Caller, id: &str) -> Result<CmdResult> {
        require_admin(caller, "delete articles")?;
        commands::delete::run(&mut self.store, id)
    }

    pub fn category_page(&self, slug: &str) -> Result<CmdResult> {
        commands::category::run(&self.store, slug)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Fails with [`NewsError::Forbidden`] unless `caller` is an admin.
///
/// Transports call this before reading a request body so that an
/// unauthorized write is rejected whatever it carries.
pub fn require_admin(caller: Caller, action: &str) -> Result<()> {
    if caller.is_admin() {
        Ok(())
    } else {
        Err(NewsError::Forbidden(format!("Only admins may {}", action)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArticleInput;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use uuid::Uuid;

    fn valid_input(title: &str) -> ArticleInput {
        ArticleInput {
            title: Some(title.to_string()),
            description: Some("Body text for the piece.".to_string()),
            thumbnail: Some("https://img.example.com/a.jpg".to_string()),
            category: Some("Politics".to_string()),
            ..Default::default()
        }
    }

    fn api() -> NewsApi<InMemoryStore> {
        NewsApi::new(InMemoryStore::new())
    }

    #[test]
    fn create_then_read_round_trips() {
        let mut api = api();
        let mut input = valid_input("Vote delayed");
        input.keywords = Some(vec!["senate".into(), "budget".into()]);
        input.author = Some("Lee".into());
        input.image_source = Some("Reuters".into());

        let created = api.create_article(Caller::Admin, input).unwrap();
        assert_eq!(created.summary(), "Article created successfully.");
        let id = created.affected_articles[0].id.to_string();

        let fetched = api.get_article(&id).unwrap().listed_articles.remove(0);
        assert_eq!(fetched.title, "Vote delayed");
        assert_eq!(fetched.author, "Lee");
        assert_eq!(fetched.image_source, "Reuters");
        assert_eq!(fetched.keywords, vec!["senate", "budget"]);
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test]
    fn create_applies_defaults() {
        let mut api = api();
        let created = api
            .create_article(Caller::Admin, valid_input("Quiet morning"))
            .unwrap();
        let article = &created.affected_articles[0];
        assert_eq!(article.author, "Admin");
        assert_eq!(article.image_source, "N/A");
    }

    #[test]
    fn create_uses_configured_defaults() {
        let config = NewsConfig {
            default_author: "Wire Desk".into(),
            ..Default::default()
        };
        let mut api = NewsApi::from_config(InMemoryStore::new(), &config);
        let created = api
            .create_article(Caller::Admin, valid_input("Bulletin"))
            .unwrap();
        assert_eq!(created.affected_articles[0].author, "Wire Desk");
    }

    #[test]
    fn anonymous_create_is_forbidden_and_writes_nothing() {
        let mut api = api();
        let result = api.create_article(Caller::Anonymous, valid_input("Sneaky"));
        assert!(matches!(result, Err(NewsError::Forbidden(_))));
        assert!(api.store().list_articles().unwrap().is_empty());
    }

    #[test]
    fn forbidden_wins_over_invalid_input() {
        let mut api = api();
        let result = api.create_article(Caller::Anonymous, ArticleInput::default());
        assert!(matches!(result, Err(NewsError::Forbidden(_))));
    }

    #[test]
    fn invalid_create_reports_field_errors() {
        let mut api = api();
        let mut input = valid_input("");
        input.thumbnail = Some("not a url".into());

        match api.create_article(Caller::Admin, input) {
            Err(NewsError::Validation(errors)) => {
                let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(paths, vec!["title", "thumbnail"]);
            }
            other => panic!("Expected Validation, got {:?}", other.map(|r| r.messages)),
        }
        assert!(api.store().list_articles().unwrap().is_empty());
    }

    #[test]
    fn enforced_categories_reject_unknown_names() {
        let mut api = api().with_policy(ValidationPolicy {
            enforce_categories: true,
        });
        let mut input = valid_input("Horoscopes");
        input.category = Some("Astrology".into());
        assert!(matches!(
            api.create_article(Caller::Admin, input),
            Err(NewsError::Validation(_))
        ));

        api.create_article(Caller::Admin, valid_input("Debate night"))
            .unwrap();
    }

    #[test]
    fn get_with_garbage_id_is_not_found() {
        let api = api();
        assert!(matches!(
            api.get_article("definitely-not-an-id"),
            Err(NewsError::ArticleNotFound(_))
        ));
        assert!(matches!(
            api.get_article(&Uuid::new_v4().to_string()),
            Err(NewsError::ArticleNotFound(_))
        ));
    }

    #[test]
    fn update_revalidates_without_defaults() {
        let mut api = api();
        let id = api
            .create_article(Caller::Admin, valid_input("Original"))
            .unwrap()
            .affected_articles[0]
            .id
            .to_string();

        // Author and image source must be supplied on update.
        match api.update_article(&id, valid_input("Revised")) {
            Err(NewsError::Validation(errors)) => {
                let paths: Vec<_> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(paths, vec!["author", "imageSource"]);
            }
            other => panic!("Expected Validation, got {:?}", other.map(|r| r.messages)),
        }

        let original = api.get_article(&id).unwrap().listed_articles.remove(0);
        let input = ArticleInput {
            title: Some("Revised".into()),
            description: Some("Rewritten body.".into()),
            thumbnail: Some("https://img.example.com/b.jpg".into()),
            video_link: Some("https://video.example.com/clip".into()),
            category: Some("Rights".into()),
            sub_category: Some("Law".into()),
            author: Some("Okafor".into()),
            image_source: Some("AP".into()),
            keywords: Some(vec!["court".into(), "appeal".into()]),
        };
        let updated = api.update_article(&id, input).unwrap();
        assert_eq!(updated.summary(), "Article updated successfully.");

        let fetched = api.get_article(&id).unwrap().listed_articles.remove(0);
        assert_eq!(fetched.title, "Revised");
        assert_eq!(fetched.description, "Rewritten body.");
        assert_eq!(fetched.thumbnail, "https://img.example.com/b.jpg");
        assert_eq!(
            fetched.video_link.as_deref(),
            Some("https://video.example.com/clip")
        );
        assert_eq!(fetched.category, "Rights");
        assert_eq!(fetched.sub_category.as_deref(), Some("Law"));
        assert_eq!(fetched.author, "Okafor");
        assert_eq!(fetched.image_source, "AP");
        assert_eq!(fetched.keywords, vec!["court", "appeal"]);
        assert_eq!(fetched.id, original.id);
        assert_eq!(fetched.created_at, original.created_at);
    }

    #[test]
    fn update_missing_article_is_not_found() {
        let fixture = StoreFixture::new().with_articles(1);
        let stored = fixture.store.list_articles().unwrap().remove(0);
        let mut api = NewsApi::new(fixture.store);

        let result = api.update_article(&Uuid::new_v4().to_string(), ArticleInput::from(&stored));
        assert!(matches!(result, Err(NewsError::ArticleNotFound(_))));
    }

    #[test]
    fn delete_requires_admin() {
        let mut api = api();
        let id = api
            .create_article(Caller::Admin, valid_input("Keep me"))
            .unwrap()
            .affected_articles[0]
            .id
            .to_string();

        assert!(matches!(
            api.delete_article(Caller::Anonymous, &id),
            Err(NewsError::Forbidden(_))
        ));
        assert!(api.get_article(&id).is_ok());

        api.delete_article(Caller::Admin, &id).unwrap();
        assert!(matches!(
            api.get_article(&id),
            Err(NewsError::ArticleNotFound(_))
        ));
        assert!(matches!(
            api.delete_article(Caller::Admin, &id),
            Err(NewsError::ArticleNotFound(_))
        ));
    }

    #[test]
    fn list_and_category_page_dispatch() {
        let fixture = StoreFixture::new()
            .with_article("Cup final", "Sports")
            .with_article("Summit", "World");
        let api = NewsApi::new(fixture.store);

        let all = api.list_articles(&ArticleFilter::default()).unwrap();
        assert_eq!(all.listed_articles.len(), 2);

        let page = api.category_page("sports").unwrap();
        assert_eq!(page.listed_articles.len(), 1);

        assert!(matches!(
            api.category_page("nowhere"),
            Err(NewsError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn view_renders_markdown() {
        let mut api = api();
        let mut input = valid_input("Explainer");
        input.description = Some("# Heading\n\nSome *emphasis*.".into());
        let id = api.create_article(Caller::Admin, input).unwrap().affected_articles[0]
            .id
            .to_string();

        let view = api.view_article(&id).unwrap().view.unwrap();
        assert!(view.html.contains("<h1>Heading</h1>"));
        assert!(view.html.contains("<em>emphasis</em>"));
    }
}
