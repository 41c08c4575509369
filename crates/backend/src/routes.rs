use axum::{middleware, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::config::AssetsConfig;
use crate::shared::request_log::request_logger;

/// Health check plus the built site; unknown paths get `index.html` so the
/// client router can resolve them.
pub fn configure_routes(assets: &AssetsConfig) -> Router {
    let site = ServeDir::new(&assets.dir).fallback(ServeFile::new(assets.index_path()));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(site)
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>sql guide</body></html>";

    fn site() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("frontend.js"), "export default 1;").unwrap();

        let assets = AssetsConfig {
            dir: dir.path().to_path_buf(),
            index: "index.html".to_string(),
        };
        let router = configure_routes(&assets);
        (dir, router)
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, router) = site();
        assert_eq!(get_body(router, "/health").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (_dir, router) = site();
        assert_eq!(get_body(router, "/").await, (StatusCode::OK, INDEX.to_string()));
    }

    #[tokio::test]
    async fn test_built_asset_is_served() {
        let (_dir, router) = site();
        let (status, body) = get_body(router, "/frontend.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_index() {
        let (_dir, router) = site();
        let (status, body) = get_body(router, "/docs/queries").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }
}
