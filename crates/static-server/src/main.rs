//! Static Asset Server
//!
//! Serves the built frontend unmodified on a fixed port. No API surface, no
//! routing beyond default static-file resolution.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tracing::{info, warn};

const PORT: u16 = 3000;
const DEFAULT_ASSET_DIR: &str = "dist";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let asset_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ASSET_DIR.to_string());
    if !Path::new(&asset_dir).is_dir() {
        warn!(%asset_dir, "asset directory does not exist; build the frontend first");
    }

    let app = build_router(&asset_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    info!(%addr, %asset_dir, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(asset_dir: &str) -> Router {
    Router::new().fallback_service(ServeDir::new(asset_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_assets() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("index.html"), "<html>todos</html>").expect("write");
        dir
    }

    #[tokio::test]
    async fn serves_index_at_root() {
        let assets = test_assets();
        let app = build_router(assets.path().to_str().expect("utf-8 path"));

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&body[..], b"<html>todos</html>");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let assets = test_assets();
        let app = build_router(assets.path().to_str().expect("utf-8 path"));

        let response = app
            .oneshot(Request::get("/missing.js").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
