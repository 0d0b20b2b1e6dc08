use crate::validation::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl NewsError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NewsError::ArticleNotFound(_) | NewsError::CategoryNotFound(_)
        )
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.path, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, NewsError>;
