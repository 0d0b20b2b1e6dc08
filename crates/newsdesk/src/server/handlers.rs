use axum::{
    extract::{FromRequest, Path, Query, Request, State},
    response::{IntoResponse, Response},
    Json,
};
use newsdeskapp::api::{self, NewsApi};
use newsdeskapp::categories::{self, Category, CategoryMatch};
use newsdeskapp::commands::get::ArticleFilter;
use newsdeskapp::error::NewsError;
use newsdeskapp::model::Article;
use newsdeskapp::render::ArticleView;
use serde::{Deserialize, Serialize};

use super::auth::Auth;
use super::form::ArticleBody;
use super::response::{self, ApiError, Reply};
use super::{AppState, DynStore};

type HandlerResult<T> = Result<Reply<T>, ApiError>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    #[serde(alias = "sub_category")]
    pub sub_category: Option<String>,
}

impl From<ListQuery> for ArticleFilter {
    fn from(query: ListQuery) -> Self {
        Self {
            category: query.category,
            sub_category: query.sub_category,
            search: query.search,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub category: &'static str,
    /// Set when the page is a subcategory.
    pub parent: Option<&'static str>,
    pub articles: Vec<Article>,
}

/// Runs one API call on the blocking pool while holding the API lock.
///
/// The store does synchronous file I/O, so it stays off the async workers.
/// Holding the lock for the whole call keeps a single writer at a time.
async fn with_api<T, F>(state: &AppState, action: &'static str, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut NewsApi<DynStore>) -> newsdeskapp::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let mut api = state.api.clone().lock_owned().await;
    tokio::task::spawn_blocking(move || op(&mut *api))
        .await
        .map_err(|e| {
            ApiError::new(action, NewsError::Store(format!("store task failed: {}", e)))
        })?
        .map_err(ApiError::during(action))
}

/// Authorization is checked before the body is read, so an anonymous
/// request is refused whatever it carries.
pub async fn create_article(
    State(state): State<AppState>,
    Auth(caller): Auth,
    request: Request,
) -> Result<Reply<Article>, Response> {
    api::require_admin(caller, "create articles")
        .map_err(|e| ApiError::new("create article", e).into_response())?;
    let ArticleBody(input) = ArticleBody::from_request(request, &state)
        .await
        .map_err(IntoResponse::into_response)?;

    let mut result = with_api(&state, "create article", move |api| {
        api.create_article(caller, input)
    })
    .await
    .map_err(IntoResponse::into_response)?;
    let article = result.affected_articles.remove(0);
    tracing::info!(id = %article.id, title = %article.title, "article created");
    Ok(response::created(result.summary(), article))
}

pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> HandlerResult<Vec<Article>> {
    let filter: ArticleFilter = query.into();
    let result = with_api(&state, "fetch articles", move |api| {
        api.list_articles(&filter)
    })
    .await?;
    let message = result.summary().to_string();
    Ok(response::ok(message, result.listed_articles))
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Article> {
    let mut result = with_api(&state, "fetch article", move |api| api.get_article(&id)).await?;
    let message = result.summary().to_string();
    Ok(response::ok(message, result.listed_articles.remove(0)))
}

pub async fn view_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<ArticleView> {
    let result = with_api(&state, "render article", move |api| api.view_article(&id)).await?;
    let message = result.summary().to_string();
    let view = result
        .view
        .ok_or_else(|| ApiError::new("render article", missing("view")))?;
    Ok(response::ok(message, view))
}

pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ArticleBody(input): ArticleBody,
) -> HandlerResult<Article> {
    let mut result = with_api(&state, "update article", move |api| {
        api.update_article(&id, input)
    })
    .await?;
    let article = result.affected_articles.remove(0);
    tracing::info!(id = %article.id, "article updated");
    Ok(response::ok(result.summary(), article))
}

pub async fn delete_article(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Path(id): Path<String>,
) -> HandlerResult<Article> {
    let mut result = with_api(&state, "delete article", move |api| {
        api.delete_article(caller, &id)
    })
    .await?;
    let article = result.affected_articles.remove(0);
    tracing::info!(id = %article.id, "article deleted");
    Ok(response::ok(result.summary(), article))
}

pub async fn list_categories() -> Reply<&'static [Category]> {
    response::ok("Categories retrieved successfully.", categories::categories())
}

pub async fn category_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> HandlerResult<CategoryPage> {
    let result = with_api(&state, "fetch category", move |api| api.category_page(&slug)).await?;
    let found = result
        .category
        .ok_or_else(|| ApiError::new("fetch category", missing("category")))?;
    let parent = match found {
        CategoryMatch::TopLevel(_) => None,
        CategoryMatch::Sub { parent, .. } => Some(parent.name),
    };
    let message = result.summary().to_string();
    Ok(response::ok(
        message,
        CategoryPage {
            category: found.name(),
            parent,
            articles: result.listed_articles,
        },
    ))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn missing(what: &str) -> NewsError {
    NewsError::Store(format!("command returned no {}", what))
}
