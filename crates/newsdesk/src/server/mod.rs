//! # HTTP Server
//!
//! The HTTP API is the second UI client of the newsdesk library, next to the
//! command line. Like the CLI it owns every transport concern and nothing else:
//!
//! - `form`: request bodies (multipart, urlencoded, JSON) into `ArticleInput`
//! - `auth`: `Authorization: Bearer` header into a `Caller`
//! - `handlers`: one function per route, each a single `NewsApi` call
//! - `response`: the `{success, message, data}` envelope and error statuses
//!
//! ## Routes
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/articles` | admin only |
//! | `GET` | `/articles` | `?category=&subCategory=&search=` |
//! | `GET` | `/articles/{id}` | |
//! | `PUT` | `/articles/{id}` | full replacement |
//! | `DELETE` | `/articles/{id}` | admin only |
//! | `GET` | `/articles/{id}/view` | rendered HTML and read time |
//! | `GET` | `/categories` | registry tree |
//! | `GET` | `/categories/{slug}` | category page |
//! | `GET` | `/health` | liveness |
//!
//! ## Concurrency
//!
//! The store is synchronous, so the API sits behind one async mutex and each
//! request holds it for exactly one operation. That operation runs on the
//! blocking pool (`spawn_blocking`), which keeps file I/O off the async
//! workers. There is a single writer per process; two servers sharing one data
//! directory are not coordinated.

mod auth;
mod form;
mod handlers;
mod response;

pub use response::Envelope;

use anyhow::Context;
use axum::{routing::get, Router};
use newsdeskapp::api::NewsApi;
use newsdeskapp::config::NewsConfig;
use newsdeskapp::store::fs::FileStore;
use newsdeskapp::store::DataStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

pub type DynStore = Box<dyn DataStore + Send>;
pub type SharedApi = Arc<Mutex<NewsApi<DynStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub api: SharedApi,
    admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(api: NewsApi<DynStore>, admin_token: Option<&str>) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
            admin_token: admin_token.map(Arc::from),
        }
    }

    pub fn admin_token(&self) -> Option<&str> {
        self.admin_token.as_deref()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/articles",
            get(handlers::list_articles).post(handlers::create_article),
        )
        .route(
            "/articles/{id}",
            get(handlers::get_article)
                .put(handlers::update_article)
                .delete(handlers::delete_article),
        )
        .route("/articles/{id}/view", get(handlers::view_article))
        .route("/categories", get(handlers::list_categories))
        .route("/categories/{slug}", get(handlers::category_page))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Opens the file store under the configured data directory and serves the
/// API until Ctrl-C.
pub async fn serve(config: &NewsConfig) -> anyhow::Result<()> {
    let data_dir = config.data_dir();
    let store: DynStore = Box::new(FileStore::open(data_dir.clone()));
    let api = NewsApi::from_config(store, config);

    if config.admin_token().is_none() {
        tracing::warn!("no admin token configured; creating and deleting articles is disabled");
    }
    if config.enforce_categories {
        tracing::info!("category names are checked against the registry on write");
    }

    let app = build_router(AppState::new(api, config.admin_token()));
    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        addr = %listener.local_addr()?,
        data_dir = %data_dir.display(),
        "newsdesk listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
