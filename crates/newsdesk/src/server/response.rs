//! The JSON envelope every endpoint answers with, and the mapping from
//! library errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use newsdeskapp::error::NewsError;
use newsdeskapp::validation::FieldError;
use serde::{Deserialize, Serialize};

/// `{"success": .., "message": .., "data": ..}`, plus `errors` on validation
/// failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl<T> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Vec::new(),
        }
    }
}

pub type Reply<T> = (StatusCode, Json<Envelope<T>>);

pub fn ok<T>(message: impl Into<String>, data: T) -> Reply<T> {
    (StatusCode::OK, Json(Envelope::ok(message, data)))
}

pub fn created<T>(message: impl Into<String>, data: T) -> Reply<T> {
    (StatusCode::CREATED, Json(Envelope::ok(message, data)))
}

/// A failed request: the error plus what was being attempted, for the
/// generic 500 message.
#[derive(Debug)]
pub struct ApiError {
    error: NewsError,
    action: &'static str,
}

impl ApiError {
    pub fn new(action: &'static str, error: NewsError) -> Self {
        Self { error, action }
    }

    /// Adapter for `map_err`: `.map_err(ApiError::during("fetch article"))`.
    pub fn during(action: &'static str) -> impl FnOnce(NewsError) -> Self {
        move |error| Self::new(action, error)
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            NewsError::Validation(_) => StatusCode::BAD_REQUEST,
            NewsError::Forbidden(_) => StatusCode::FORBIDDEN,
            NewsError::ArticleNotFound(_) | NewsError::CategoryNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.error {
            NewsError::Validation(errors) => Envelope {
                errors,
                ..Envelope::failure("Validation failed")
            },
            NewsError::Forbidden(reason) => Envelope::failure(reason),
            NewsError::ArticleNotFound(_) => Envelope::failure("Article not found"),
            NewsError::CategoryNotFound(_) => Envelope::failure("Category not found"),
            other => {
                tracing::error!(error = %other, "Failed to {}", self.action);
                Envelope::failure(format!("Failed to {}", self.action))
            }
        };
        (status, Json(body)).into_response()
    }
}
