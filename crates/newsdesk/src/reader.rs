//! Fetches articles from a running newsdesk API.
//!
//! The reader knows a primary base URL and optionally a secondary one. A
//! failed fetch from the primary is retried once against the secondary, with
//! no backoff; whatever the secondary answers is final.

use newsdeskapp::commands::helpers::parse_article_id;
use newsdeskapp::config::ReadConfig;
use newsdeskapp::model::Article;
use newsdeskapp::render::ArticleView;
use reqwest::StatusCode;
use thiserror::Error;

use crate::server::Envelope;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },

    #[error("unreadable response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

pub struct ArticleReader {
    client: reqwest::Client,
    primary: String,
    secondary: Option<String>,
}

impl ArticleReader {
    pub fn new(primary: impl Into<String>, secondary: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), primary, secondary)
    }

    pub fn with_client(
        client: reqwest::Client,
        primary: impl Into<String>,
        secondary: Option<String>,
    ) -> Self {
        Self {
            client,
            primary: primary.into(),
            secondary,
        }
    }

    pub fn from_config(config: &ReadConfig) -> Self {
        Self::new(
            config.primary_url.clone(),
            config
                .secondary_url
                .clone()
                .filter(|url| !url.trim().is_empty()),
        )
    }

    pub async fn fetch_article(&self, id: &str) -> Result<Article, ReadError> {
        let id = parse_article_id(id)
            .map_err(|_| ReadError::NotFound(id.to_string()))?
            .to_string();

        match self.fetch_from(&self.primary, &id).await {
            Ok(article) => Ok(article),
            Err(err) => match &self.secondary {
                Some(secondary) => {
                    tracing::warn!(
                        error = %err,
                        fallback = %secondary,
                        "primary fetch failed, retrying"
                    );
                    self.fetch_from(secondary, &id).await
                }
                None => Err(err),
            },
        }
    }

    pub async fn fetch_view(&self, id: &str) -> Result<ArticleView, ReadError> {
        self.fetch_article(id).await.map(ArticleView::new)
    }

    async fn fetch_from(&self, base: &str, id: &str) -> Result<Article, ReadError> {
        let url = format!("{}/articles/{}", base.trim_end_matches('/'), id);
        tracing::debug!(%url, "fetching article");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ReadError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ReadError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(ReadError::Status { url, status });
        }

        let envelope: Envelope<Article> =
            response.json().await.map_err(|e| ReadError::Decode {
                url: url.clone(),
                reason: e.to_string(),
            })?;
        envelope.data.ok_or_else(|| ReadError::Decode {
            url,
            reason: "envelope carried no data".to_string(),
        })
    }
}
