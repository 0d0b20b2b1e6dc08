//! Article field validation.
//!
//! Turns a loosely-typed [`ArticleInput`] into an [`ArticleDraft`], or reports
//! every failing field at once.
//!
//! Rules:
//! - `title`, `description`, `category`, `author`, `imageSource` must be non-empty
//!   after trimming
//! - `thumbnail` must be an absolute `http`/`https` URL
//! - `videoLink`, when present and non-empty, must be an absolute `http`/`https` URL
//! - `subCategory` is optional; an empty value is treated as absent
//! - with [`ValidationPolicy::enforce_categories`], `category` and `subCategory`
//!   must name entries of the category registry
//!
//! On create, a missing `author` or `imageSource` is filled from
//! [`DraftDefaults`] before the checks run.

use crate::categories;
use crate::model::{ArticleDraft, ArticleInput};
use serde::{Deserialize, Serialize};
use url::Url;

/// A single rejected field, reported as `{ "path": ..., "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Values substituted for absent optional-on-input fields at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftDefaults {
    pub author: String,
    pub image_source: String,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            author: "Admin".to_string(),
            image_source: "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject categories and subcategories missing from the registry.
    pub enforce_categories: bool,
}

/// Validates raw input into a draft.
///
/// `defaults` is `Some` for creation and `None` for full-replacement updates,
/// where every required field must be supplied explicitly.
///
/// # Examples
/// ```
/// use newsdeskapp::model::ArticleInput;
/// use newsdeskapp::validation::{validate_input, ValidationPolicy};
///
/// let input = ArticleInput {
///     title: Some("Flood warning".into()),
///     description: Some("Rivers are rising.".into()),
///     thumbnail: Some("https://img.example.com/flood.jpg".into()),
///     image_source: Some("AP".into()),
///     category: Some("Environment".into()),
///     author: Some("Sam".into()),
///     ..Default::default()
/// };
/// let draft = validate_input(input, None, &ValidationPolicy::default()).unwrap();
/// assert_eq!(draft.title, "Flood warning");
///
/// let errors = validate_input(ArticleInput::default(), None, &ValidationPolicy::default())
///     .unwrap_err();
/// assert!(errors.iter().any(|e| e.path == "title"));
/// ```
pub fn validate_input(
    input: ArticleInput,
    defaults: Option<&DraftDefaults>,
    policy: &ValidationPolicy,
) -> Result<ArticleDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let author = non_empty(input.author).or_else(|| defaults.map(|d| d.author.clone()));
    let image_source =
        non_empty(input.image_source).or_else(|| defaults.map(|d| d.image_source.clone()));

    let title = required(input.title, "title", "Title is required", &mut errors);
    let description = required_raw(
        input.description,
        "description",
        "Description is required",
        &mut errors,
    );
    let thumbnail = match non_empty(input.thumbnail) {
        Some(raw) if is_web_url(&raw) => Some(raw),
        _ => {
            errors.push(FieldError::new("thumbnail", "Invalid thumbnail URL"));
            None
        }
    };
    let video_link = match non_empty(input.video_link) {
        None => None,
        Some(raw) if is_web_url(&raw) => Some(raw),
        Some(_) => {
            errors.push(FieldError::new("videoLink", "Invalid video URL"));
            None
        }
    };
    let category = required(input.category, "category", "Category is required", &mut errors);
    let sub_category = non_empty(input.sub_category);
    let author = required(author, "author", "Author is required", &mut errors);
    let image_source = required(
        image_source,
        "imageSource",
        "Image source is required",
        &mut errors,
    );
    let keywords = input
        .keywords
        .unwrap_or_default()
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    if policy.enforce_categories {
        if let Some(name) = &category {
            if !categories::is_known_category(name) {
                errors.push(FieldError::new(
                    "category",
                    format!("Unknown category \"{}\"", name),
                ));
            }
        }
        if let Some(name) = &sub_category {
            if !categories::is_known_subcategory(name) {
                errors.push(FieldError::new(
                    "subCategory",
                    format!("Unknown subcategory \"{}\"", name),
                ));
            }
        }
    }

    match (title, description, thumbnail, category, author, image_source) {
        (
            Some(title),
            Some(description),
            Some(thumbnail),
            Some(category),
            Some(author),
            Some(image_source),
        ) if errors.is_empty() => Ok(ArticleDraft {
            title,
            description,
            thumbnail,
            video_link,
            image_source,
            category,
            sub_category,
            author,
            keywords,
        }),
        _ => Err(errors),
    }
}

/// Checks that a string is an absolute `http`/`https` URL with a host.
pub fn is_web_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(
    value: Option<String>,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = non_empty(value);
    if value.is_none() {
        errors.push(FieldError::new(path, message));
    }
    value
}

// Markdown bodies keep their surrounding whitespace.
fn required_raw(
    value: Option<String>,
    path: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.push(FieldError::new(path, message));
            None
        }
    }
}
