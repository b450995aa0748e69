//! Static file server for the built timeline site.
//!
//! Serves the cargo-leptos site root and falls back to `index.html` so the
//! client-side router handles every other path.

use std::path::Path;

use axum::Router;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};

/// Result type alias using `ServerError`.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Server startup errors.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Leptos options could not be read.
    #[error("Leptos configuration error: {0}")]
    Config(#[from] leptos::config::errors::LeptosConfigError),

    /// Logger was already installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// Socket I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create the router serving `site_root`.
pub fn create_router(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));
    let files = ServeDir::new(site_root).fallback(index);

    Router::new()
        .fallback_service(files)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_serves_site_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("pkg/our-timeline.js"), "export {}").unwrap();

        let response = create_router(dir.path())
            .oneshot(get("/pkg/our-timeline.js"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();

        let response = create_router(dir.path())
            .oneshot(get("/some/page"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_index_is_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let response = create_router(dir.path())
            .oneshot(get("/anything"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: ServerError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
