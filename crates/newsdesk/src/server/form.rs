//! Article request bodies.
//!
//! Writes accept `multipart/form-data`, `application/x-www-form-urlencoded`
//! and JSON. All three are reduced to the same [`ArticleInput`]; validation
//! happens later, in the API.

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use newsdeskapp::model::{split_keywords, ArticleInput};
use serde::Deserialize;

use super::response::Envelope;

#[derive(Debug)]
pub struct ArticleBody(pub ArticleInput);

/// JSON article payload. Keywords may be a list or a comma-separated string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JsonArticle {
    title: Option<String>,
    description: Option<String>,
    thumbnail: Option<String>,
    #[serde(alias = "video_link")]
    video_link: Option<String>,
    #[serde(alias = "image_source")]
    image_source: Option<String>,
    category: Option<String>,
    #[serde(alias = "sub_category")]
    sub_category: Option<String>,
    author: Option<String>,
    keywords: Option<Keywords>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Keywords {
    List(Vec<String>),
    Csv(String),
}

impl From<JsonArticle> for ArticleInput {
    fn from(body: JsonArticle) -> Self {
        Self {
            title: body.title,
            description: body.description,
            thumbnail: body.thumbnail,
            video_link: body.video_link,
            image_source: body.image_source,
            category: body.category,
            sub_category: body.sub_category,
            author: body.author,
            keywords: body.keywords.map(|k| match k {
                Keywords::List(list) => list,
                Keywords::Csv(raw) => split_keywords(&raw),
            }),
        }
    }
}

/// Why a body could not be read.
#[derive(Debug)]
pub struct BodyRejection {
    status: StatusCode,
    message: String,
}

impl BodyRejection {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::failure(self.message))).into_response()
    }
}

impl<S> FromRequest<S> for ArticleBody
where
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "multipart/form-data" => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| BodyRejection::bad_request(e.body_text()))?;
                read_multipart(multipart).await.map(ArticleBody)
            }
            "application/x-www-form-urlencoded" => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| BodyRejection::bad_request(e.body_text()))?;
                Ok(ArticleBody(from_pairs(pairs)))
            }
            "application/json" | "" => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| BodyRejection::bad_request(e.body_text()))?;
                let body: JsonArticle = serde_json::from_slice(&bytes)
                    .map_err(|e| BodyRejection::bad_request(format!("Invalid JSON body: {}", e)))?;
                Ok(ArticleBody(body.into()))
            }
            other => Err(BodyRejection {
                status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                message: format!("Unsupported content type: {}", other),
            }),
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ArticleInput, BodyRejection> {
    let mut input = ArticleInput::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BodyRejection::bad_request(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if field.file_name().is_some() {
            // Uploaded media is hosted elsewhere; only URLs are stored.
            tracing::debug!(field = %name, "ignoring file part");
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|e| BodyRejection::bad_request(e.body_text()))?;
        input.set_field(&name, value);
    }
    Ok(input)
}

fn from_pairs(pairs: Vec<(String, String)>) -> ArticleInput {
    let mut input = ArticleInput::default();
    for (name, value) in pairs {
        input.set_field(&name, value);
    }
    input
}
