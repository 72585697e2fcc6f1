//! Development server: JSON API, feeds and the public directory

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::blog::Blog;
use crate::error::SourceError;
use crate::feed;
use crate::Site;

/// Posts returned by `/api/posts/latest` without `?n=`
pub const DEFAULT_LATEST: usize = 5;

/// Server state
struct AppState {
    site: Site,
    blog: Blog,
}

type SharedState = Arc<AppState>;

/// Start the server; every request goes back to the content sources
pub async fn start(site: &Site, blog: Blog, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone(), blog);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Routes, with anything unknown served from the public directory
pub fn router(site: Site, blog: Blog) -> Router {
    let public = ServeDir::new(&site.public_dir).append_index_html_on_directories(true);
    let state = Arc::new(AppState { site, blog });

    Router::new()
        .route("/api/posts", get(posts))
        .route("/api/posts/latest", get(latest))
        .route("/api/posts/:slug", get(post_detail))
        .route("/api/categories", get(categories))
        .route("/api/slugs", get(slugs))
        .route("/rss.xml", get(rss))
        .route("/robots.txt", get(robots))
        .route("/sitemap-index.xml", get(sitemap_index))
        .route("/sitemap-0.xml", get(sitemap))
        .fallback_service(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Maps content errors onto HTTP statuses
struct ApiError(SourceError);

impl From<SourceError> for ApiError {
    fn from(e: SourceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            tracing::error!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct LatestQuery {
    n: Option<usize>,
}

async fn posts(State(state): State<SharedState>) -> ApiResult<Response> {
    Ok(Json(state.blog.all_summaries().await?).into_response())
}

async fn latest(
    State(state): State<SharedState>,
    Query(query): Query<LatestQuery>,
) -> ApiResult<Response> {
    let n = query.n.unwrap_or(DEFAULT_LATEST);
    Ok(Json(state.blog.latest_summaries(n).await?).into_response())
}

async fn post_detail(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    let detail = state.blog.detail(&slug).await?;
    Ok(Json(detail.view()).into_response())
}

async fn categories(State(state): State<SharedState>) -> ApiResult<Response> {
    Ok(Json(state.blog.summaries_by_category().await?).into_response())
}

async fn slugs(State(state): State<SharedState>) -> ApiResult<Response> {
    Ok(Json(state.blog.slugs().await?).into_response())
}

async fn rss(State(state): State<SharedState>) -> ApiResult<Response> {
    let posts = state.blog.all_summaries().await?;
    Ok(xml("application/rss+xml", feed::rss(&state.site.config, &posts)))
}

async fn robots(State(state): State<SharedState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        feed::robots(&state.site.config),
    )
        .into_response()
}

async fn sitemap_index(State(state): State<SharedState>) -> Response {
    xml("application/xml", feed::sitemap_index(&state.site.config))
}

async fn sitemap(State(state): State<SharedState>) -> ApiResult<Response> {
    let slugs = state.blog.slugs().await?;
    Ok(xml("application/xml", feed::sitemap(&state.site.config, &slugs)))
}

fn xml(content_type: &'static str, body: String) -> Response {
    ([(header::CONTENT_TYPE, content_type)], body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::testing::{local_entries, StubRemote};
    use crate::source::{FallbackSource, LocalSource};
    use tempfile::TempDir;

    async fn spawn(tmp: &TempDir) -> String {
        let site = Site::new(tmp.path()).unwrap();
        std::fs::create_dir_all(&site.public_dir).unwrap();
        std::fs::write(site.public_dir.join("hello.txt"), "static file").unwrap();

        let blog = Blog::new(FallbackSource::new(
            StubRemote::with_posts(&[
                ("remote-a", "2024-03-01T00:00:00Z", Some("tech")),
                ("remote-b", "2024-01-01T00:00:00Z", None),
            ]),
            LocalSource::from_entries(local_entries(&[("local", "2024-02-01", None)])),
        ));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(site, blog)).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_api_routes() {
        let tmp = TempDir::new().unwrap();
        let base = spawn(&tmp).await;

        let posts: serde_json::Value = reqwest::get(format!("{}/api/posts", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(posts.as_array().unwrap().len(), 2);
        assert_eq!(posts[0]["slug"], "remote-a");

        let latest: serde_json::Value = reqwest::get(format!("{}/api/posts/latest?n=1", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(latest.as_array().unwrap().len(), 1);

        let categories: serde_json::Value = reqwest::get(format!("{}/api/categories", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(categories["tech"][0]["slug"], "remote-a");

        let detail: serde_json::Value = reqwest::get(format!("{}/api/posts/local", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(detail["source"], "local");
        assert!(detail["contentHtml"].as_str().unwrap().contains("<h1"));
    }

    #[tokio::test]
    async fn test_unknown_slug_is_404() {
        let tmp = TempDir::new().unwrap();
        let base = spawn(&tmp).await;

        let resp = reqwest::get(format!("{}/api/posts/missing", base))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_feeds_and_static_files() {
        let tmp = TempDir::new().unwrap();
        let base = spawn(&tmp).await;

        let resp = reqwest::get(format!("{}/robots.txt", base)).await.unwrap();
        assert!(resp
            .text()
            .await
            .unwrap()
            .contains("Sitemap: https://example.com/sitemap-index.xml"));

        let resp = reqwest::get(format!("{}/rss.xml", base)).await.unwrap();
        assert_eq!(
            resp.headers()[reqwest::header::CONTENT_TYPE],
            "application/rss+xml"
        );
        assert!(resp.text().await.unwrap().contains("remote-b"));

        let resp = reqwest::get(format!("{}/hello.txt", base)).await.unwrap();
        assert_eq!(resp.text().await.unwrap(), "static file");
    }
}
