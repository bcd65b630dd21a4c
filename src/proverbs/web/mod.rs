//! # Web Layer
//!
//! An axum router over a shared [`ProverbsApi`]: the JSON API under `/api/v1`,
//! server-rendered pages everywhere else, and static assets under `/static`.
//!
//! Handlers hold no logic of their own. They parse the request, call one
//! facade method and turn the result into JSON or HTML. Status codes are
//! decided here and nowhere else.
//!
//! [`ProverbsApi`]: crate::api::ProverbsApi

use crate::api::ProverbsApi;
use crate::config::ProverbsConfig;
use crate::error::{ProverbsError, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

pub mod api;
pub mod error;
pub mod pages;
pub mod params;
pub mod templates;

use templates::PageRenderer;

/// Shared by every handler. Both halves are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ProverbsApi>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(api: ProverbsApi) -> Result<Self> {
        Ok(Self {
            api: Arc::new(api),
            pages: Arc::new(PageRenderer::new()?),
        })
    }
}

/// All routes, without the middleware stack.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/proverbs/{id}", get(pages::proverb))
        .route("/categories", get(pages::categories))
        .route("/categories/{category}", get(pages::category))
        .route("/tags", get(pages::tags))
        .route("/tags/{tag}", get(pages::tag))
        .route("/sources/{source}", get(pages::source))
        .route("/search", get(pages::search))
        .route("/random", get(pages::random))
        .route("/healthz", get(health))
        .nest("/api/v1", api::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// The router wrapped in CORS, request timeout and request logging.
pub fn app(state: AppState, config: &ProverbsConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    router(state, &config.static_dir)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Binds and serves until Ctrl+C or SIGTERM.
pub async fn serve(api: ProverbsApi, config: &ProverbsConfig) -> Result<()> {
    let state = AppState::new(api)?;
    let app = app(state, config);

    let address = config.socket_addr()?;
    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await.map_err(ProverbsError::Io)?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ProverbsError::Io)?;

    info!("Server stopped");
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::examples::ExampleStats;
    use crate::store::Collection;
    use crate::test_utils::sample_collection;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_router(collection: Collection, static_dir: &Path) -> Router {
        let api = ProverbsApi::new(collection).with_example_stats(ExampleStats {
            total: 1,
            official: 1,
            community: 0,
        });
        router(AppState::new(api).unwrap(), static_dir)
    }

    async fn get_raw(collection: Collection, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let temp = TempDir::new().unwrap();
        let response = test_router(collection, temp.path())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, _, body) = get_raw(sample_collection(), uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let (status, _, body) = get_raw(sample_collection(), uri).await;
        (status, body)
    }

    #[tokio::test]
    async fn list_returns_page_and_total() {
        let (status, json) = get_json("/api/v1/proverbs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 2);
        assert_eq!(json["limit"], 50);
        assert_eq!(json["offset"], 0);
        assert_eq!(json["proverbs"][0]["id"], "official-001");
        assert_eq!(json["proverbs"][1]["id"], "community-001");
    }

    #[tokio::test]
    async fn list_paginates_and_clamps() {
        let (_, json) = get_json("/api/v1/proverbs?limit=1&offset=1").await;
        assert_eq!(json["total"], 2);
        assert_eq!(json["proverbs"].as_array().unwrap().len(), 1);
        assert_eq!(json["proverbs"][0]["id"], "community-001");

        let (status, json) = get_json("/api/v1/proverbs?offset=99").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["proverbs"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_pagination_falls_back_to_defaults() {
        let (status, json) = get_json("/api/v1/proverbs?limit=abc&offset=-3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["limit"], 50);
        assert_eq!(json["offset"], 0);
        assert_eq!(json["total"], 2);
    }

    #[tokio::test]
    async fn list_filters() {
        let (_, json) = get_json("/api/v1/proverbs?category=design&q=zero").await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["proverbs"][0]["id"], "community-001");
    }

    #[tokio::test]
    async fn tag_filter_is_exact() {
        let (_, json) = get_json("/api/v1/proverbs?tag=channels").await;
        assert_eq!(json["total"], 1);

        let (_, json) = get_json("/api/v1/proverbs?tag=%20channels").await;
        assert_eq!(json["total"], 0);

        let (_, json) = get_json("/api/v1/proverbs?category=design%20").await;
        assert_eq!(json["total"], 0);
    }

    #[tokio::test]
    async fn by_id_found_and_missing() {
        let (status, json) = get_json("/api/v1/proverbs/official-001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["category"], "concurrency");
        assert_eq!(json["source"], "official");

        let (status, json) = get_json("/api/v1/proverbs/official-999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("official-999"));
    }

    #[tokio::test]
    async fn search_shapes() {
        let (_, json) = get_json("/api/v1/proverbs/search?q=zero").await;
        assert_eq!(json["query"], "zero");
        assert_eq!(json["count"], 1);
        assert_eq!(json["results"][0]["id"], "community-001");

        let (status, json) = get_json("/api/v1/proverbs/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn stats_and_example_stats() {
        let (_, json) = get_json("/api/v1/proverbs/stats").await;
        assert_eq!(json["total"], 2);
        assert_eq!(json["categories"]["concurrency"], 1);
        assert_eq!(json["categories"]["design"], 1);

        let (_, json) = get_json("/api/v1/examples/stats").await;
        assert_eq!(json["official"], 1);
    }

    #[tokio::test]
    async fn grouped_listings() {
        let (_, json) = get_json("/api/v1/proverbs/categories/concurrency").await;
        assert_eq!(json["category"], "concurrency");
        assert_eq!(json["count"], 1);

        let (_, json) = get_json("/api/v1/proverbs/sources/community").await;
        assert_eq!(json["count"], 1);

        let (_, json) = get_json("/api/v1/proverbs/sources/everyone").await;
        assert_eq!(json["count"], 2);

        let (_, json) = get_json("/api/v1/proverbs/tags/channels").await;
        assert_eq!(json["tag"], "channels");
        assert_eq!(json["proverbs"][0]["id"], "official-001");
    }

    #[tokio::test]
    async fn random_on_empty_collection_is_sentinel() {
        let (status, _, body) = get_raw(Collection::default(), "/api/v1/proverbs/random").await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["id"], "");
    }

    #[tokio::test]
    async fn random_page_redirects() {
        let (status, headers, _) = get_raw(sample_collection(), "/random").await;
        assert_eq!(status, StatusCode::FOUND);
        let location = headers[header::LOCATION].to_str().unwrap();
        assert!(location.starts_with("/proverbs/"));

        let (status, headers, _) = get_raw(Collection::default(), "/random").await;
        assert_eq!(status, StatusCode::FOUND);
        assert_eq!(headers[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn pages_render() {
        let (status, body) = get_page("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Make the zero value useful"));
        assert!(body.contains("/proverbs/official-001"));

        let (status, body) = get_page("/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Reflection"));

        let (_, body) = get_page("/tags/zero-value").await;
        assert!(body.contains("/proverbs/community-001"));

        let (_, body) = get_page("/search?q=ZERO").await;
        assert!(body.contains("1 result for"));
    }

    #[tokio::test]
    async fn proverb_page_has_navigation_and_markdown() {
        let (status, body) = get_page("/proverbs/community-001").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Types should be usable without explicit initialization."));
        assert!(body.contains("href=\"/proverbs/official-001\""));
        assert!(body.contains("Design"));
    }

    #[tokio::test]
    async fn missing_proverb_page_is_404() {
        let (status, body) = get_page("/proverbs/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("nope"));
    }

    #[tokio::test]
    async fn health_check() {
        let (status, body) = get_page("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn app_allows_cross_origin_requests() {
        let temp = TempDir::new().unwrap();
        let config = ProverbsConfig {
            static_dir: temp.path().to_path_buf(),
            ..Default::default()
        };
        let state = AppState::new(ProverbsApi::new(sample_collection())).unwrap();
        let response = app(state, &config)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/proverbs/stats")
                    .header(header::ORIGIN, "https://example.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn serves_static_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("style.css"), "body {}").unwrap();
        let response = test_router(sample_collection(), temp.path())
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
