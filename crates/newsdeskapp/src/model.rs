//! # Domain Model: Articles
//!
//! This module defines the core data structures for newsdesk: [`Article`],
//! [`ArticleDraft`] and [`ArticleInput`].
//!
//! ## Three Shapes of an Article
//!
//! ```text
//! ArticleInput   <-- loosely typed, straight from a form or JSON body
//!      │ validation::validate_input
//!      ▼
//! ArticleDraft   <-- every editable field present and well-formed
//!      │ Article::new / Article::apply
//!      ▼
//! Article        <-- draft + id + timestamps, the persisted document
//! ```
//!
//! Nothing downstream of validation ever sees an `ArticleInput`. The store only
//! accepts full [`Article`] values, so a partially-populated record cannot be
//! written.
//!
//! ## Serialization
//!
//! Articles are stored and served as JSON with camelCase keys
//! (`imageSource`, `videoLink`, `subCategory`, `createdAt`, `updatedAt`).
//! Optional fields serialize as `null` rather than being omitted.
//!
//! ## Identity and Timestamps
//!
//! - `id` is a v4 UUID assigned by [`Article::new`] and never changed.
//! - `created_at` is set once; [`Article::apply`] only moves `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    /// Markdown body.
    pub description: String,
    pub thumbnail: String,
    #[serde(default)]
    pub video_link: Option<String>,
    pub image_source: String,
    pub category: String,
    #[serde(default)]
    pub sub_category: Option<String>,
    pub author: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn new(draft: ArticleDraft) -> Self {
        let now = Utc::now();
        let ArticleDraft {
            title,
            description,
            thumbnail,
            video_link,
            image_source,
            category,
            sub_category,
            author,
            keywords,
        } = draft;
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            thumbnail,
            video_link,
            image_source,
            category,
            sub_category,
            author,
            keywords,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every editable field with the draft's values.
    pub fn apply(&mut self, draft: ArticleDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.thumbnail = draft.thumbnail;
        self.video_link = draft.video_link;
        self.image_source = draft.image_source;
        self.category = draft.category;
        self.sub_category = draft.sub_category;
        self.author = draft.author;
        self.keywords = draft.keywords;
        self.updated_at = Utc::now();
    }

    /// The text fields searched by `?search=`, in match priority order.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.author.as_str(),
            self.image_source.as_str(),
        ]
        .into_iter()
        .chain(self.keywords.iter().map(String::as_str))
    }
}

/// The editable part of an article after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub video_link: Option<String>,
    pub image_source: String,
    pub category: String,
    pub sub_category: Option<String>,
    pub author: String,
    pub keywords: Vec<String>,
}

/// Raw article fields as submitted by a client.
///
/// Every field is optional here; `validation::validate_input` decides what is
/// missing. Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub video_link: Option<String>,
    pub image_source: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<Vec<String>>,
}

impl ArticleInput {
    /// Sets a field from its wire name. Unknown names are ignored.
    ///
    /// Accepts both the camelCase names used by the JSON API and their
    /// snake_case spellings. `keywords` is parsed as a comma-separated list.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = Some(value),
            "description" => self.description = Some(value),
            "thumbnail" => self.thumbnail = Some(value),
            "videoLink" | "video_link" => self.video_link = Some(value),
            "imageSource" | "image_source" => self.image_source = Some(value),
            "category" => self.category = Some(value),
            "subCategory" | "sub_category" => self.sub_category = Some(value),
            "author" => self.author = Some(value),
            "keywords" => self.keywords = Some(split_keywords(&value)),
            _ => {}
        }
    }
}

impl From<&Article> for ArticleInput {
    fn from(article: &Article) -> Self {
        Self {
            title: Some(article.title.clone()),
            description: Some(article.description.clone()),
            thumbnail: Some(article.thumbnail.clone()),
            video_link: article.video_link.clone(),
            image_source: Some(article.image_source.clone()),
            category: Some(article.category.clone()),
            sub_category: article.sub_category.clone(),
            author: Some(article.author.clone()),
            keywords: Some(article.keywords.clone()),
        }
    }
}

/// Splits a comma-separated keyword string, trimming and dropping empties.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ArticleDraft {
        ArticleDraft {
            title: "Rates hold steady".into(),
            description: "The central bank kept rates unchanged.".into(),
            thumbnail: "https://img.example.com/rates.jpg".into(),
            video_link: None,
            image_source: "Reuters".into(),
            category: "Business".into(),
            sub_category: Some("Stock Market".into()),
            author: "Dana".into(),
            keywords: vec!["economy".into()],
        }
    }

    #[test]
    fn new_article_gets_id_and_equal_timestamps() {
        let article = Article::new(draft());
        assert_eq!(article.created_at, article.updated_at);
        assert_eq!(article.title, "Rates hold steady");
        assert!(!article.id.is_nil());
    }

    #[test]
    fn apply_replaces_fields_and_keeps_identity() {
        let mut article = Article::new(draft());
        let id = article.id;
        let created = article.created_at;

        let mut next = draft();
        next.title = "Rates cut".into();
        next.sub_category = None;
        next.keywords = vec![];
        article.apply(next);

        assert_eq!(article.id, id);
        assert_eq!(article.created_at, created);
        assert!(article.updated_at >= created);
        assert_eq!(article.title, "Rates cut");
        assert_eq!(article.sub_category, None);
        assert!(article.keywords.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let article = Article::new(draft());
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["imageSource"], "Reuters");
        assert_eq!(json["subCategory"], "Stock Market");
        assert!(json["videoLink"].is_null());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("image_source").is_none());
    }

    #[test]
    fn deserializes_legacy_document_without_optional_fields() {
        let raw = r#"{
            "id": "5f0c6f9e-4c1b-4d7e-9a53-1f1f2f3f4f5f",
            "title": "T",
            "description": "D",
            "thumbnail": "https://x.example/t.png",
            "imageSource": "N/A",
            "category": "World",
            "author": "Admin",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let article: Article = serde_json::from_str(raw).unwrap();
        assert!(article.keywords.is_empty());
        assert_eq!(article.video_link, None);
        assert_eq!(article.sub_category, None);
    }

    #[test]
    fn split_keywords_trims_and_drops_empties() {
        assert_eq!(
            split_keywords(" election, ,vote ,,  senate "),
            vec!["election", "vote", "senate"]
        );
        assert!(split_keywords("").is_empty());
    }

    #[test]
    fn set_field_accepts_both_spellings() {
        let mut input = ArticleInput::default();
        input.set_field("imageSource", "AP".into());
        input.set_field("sub_category", "Law".into());
        input.set_field("keywords", "a,b".into());
        input.set_field("unknown", "ignored".into());
        assert_eq!(input.image_source.as_deref(), Some("AP"));
        assert_eq!(input.sub_category.as_deref(), Some("Law"));
        assert_eq!(input.keywords, Some(vec!["a".to_string(), "b".to_string()]));
    }
}
