// CORS configuration

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// `*` anywhere in `origins` allows every origin
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    async fn preflight(origins: &[&str], origin: &str) -> Option<HeaderValue> {
        let origins: Vec<String> = origins.iter().map(|s| s.to_string()).collect();
        let app = Router::new()
            .route("/health", get(|| async { "ok" }))
            .layer(cors_layer(&origins));

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/health")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn wildcard_allows_any_origin() {
        let allowed = preflight(&["*"], "http://localhost:3000").await;
        assert_eq!(allowed.unwrap(), "*");
    }

    #[tokio::test]
    async fn list_only_allows_listed_origins() {
        let allowed = preflight(&["http://localhost:5173"], "http://localhost:5173").await;
        assert_eq!(allowed.unwrap(), "http://localhost:5173");

        let denied = preflight(&["http://localhost:5173"], "http://evil.example").await;
        assert!(denied.is_none());
    }
}
