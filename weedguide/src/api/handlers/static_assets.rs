//! HTTP handler for embedded static assets.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::{
    errors::{Error, Result},
    static_assets::Assets,
};

pub const ASSET_CACHE_CONTROL: &str = "public, max-age=3600";

/// Serve a file from the embedded `static/` directory
#[instrument]
pub async fn serve_static(Path(path): Path<String>) -> Result<Response> {
    let Some(content) = Assets::get(&path) else {
        return Err(Error::NotFound {
            resource: "Static asset".to_string(),
            id: path,
        });
    };

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Ok((
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, ASSET_CACHE_CONTROL.to_string()),
        ],
        content.data.into_owned(),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;

    fn create_test_router() -> Router {
        Router::new().route("/static/{*path}", get(serve_static))
    }

    #[tokio::test]
    async fn test_serve_stylesheet() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/static/css/styles.css").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").map(|v| v.to_str().unwrap()),
            Some("text/css")
        );
        assert_eq!(
            response.headers().get("cache-control").map(|v| v.to_str().unwrap()),
            Some(ASSET_CACHE_CONTROL)
        );
        assert!(response.text().contains(".masthead"));
    }

    #[tokio::test]
    async fn test_unknown_asset_is_404() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/static/css/missing.css").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "Static asset 'css/missing.css' not found");
    }

    #[tokio::test]
    async fn test_parent_directory_is_not_served() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/static/../Cargo.toml").await;

        assert_ne!(response.status_code(), StatusCode::OK);
    }
}
