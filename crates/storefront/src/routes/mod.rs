//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page (?faq=0,2 opens accordion entries)
//! GET  /health                 - Health check
//! GET  /site.webmanifest       - Web app manifest
//! GET  /static/*               - Stylesheet and other assets
//!
//! # Theme
//! POST /theme/toggle           - Flip light/dark, redirect to /
//! POST /theme                  - Set theme=light|dark, redirect to /
//!
//! # Newsletter (rate limited)
//! POST /newsletter/subscribe   - Email capture, re-renders the page with a notice
//! ```

pub mod home;
pub mod manifest;
pub mod newsletter;
pub mod theme;

use axum::{
    Router,
    http::Uri,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::middleware::{
    newsletter_rate_limiter, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;
use crate::theme::{CookieStorage, ThemeStore};

/// Create the theme routes router.
pub fn theme_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(theme::set))
        .route("/toggle", post(theme::toggle))
}

/// Create all page routes for the storefront.
pub fn routes(config: &StorefrontConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/site.webmanifest", get(manifest::webmanifest))
        .nest("/theme", theme_routes())
        .route(
            "/newsletter/subscribe",
            post(newsletter::subscribe)
                .layer(newsletter_rate_limiter(config.trust_proxy_headers)),
        )
}

/// Build the full application: routes, static files, and the middleware stack.
///
/// Sentry layers are added by the binary on top of this router.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes(state.config()))
        .nest_service("/static", static_files)
        .fallback(not_found)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(theme: ThemeStore<CookieStorage>, uri: Uri) -> AppError {
    AppError::NotFound {
        path: uri.path().to_string(),
        theme: theme.get(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::StorefrontConfig;

    fn test_app() -> Router {
        app(AppState::new(
            StorefrontConfig::default(),
            Catalog::lego_store(),
        ))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_home_defaults_to_dark() {
        let response = test_app().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert!(response.headers().contains_key(header::CONTENT_SECURITY_POLICY));

        let html = body_text(response).await;
        assert!(html.contains(r#"<html lang="ru" class="dark">"#));
    }

    #[tokio::test]
    async fn test_home_respects_light_cookie() {
        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, "lego-theme=light")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        let html = body_text(response).await;
        assert!(html.contains(r#"<html lang="ru">"#));
        assert!(!html.contains(r#"class="dark""#));
    }

    #[tokio::test]
    async fn test_home_opens_requested_faq_entries() {
        let response = test_app().oneshot(get_request("/?faq=1,99")).await.unwrap();
        let html = body_text(response).await;

        assert!(html.contains(r#"id="faq-1" class="faq-item open""#));
        assert!(html.contains(r#"id="faq-0" class="faq-item""#));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = test_app()
            .oneshot(get_request("/no-such-page"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("/no-such-page"));
    }

    #[tokio::test]
    async fn test_not_found_page_follows_theme_cookie() {
        let request = Request::builder()
            .uri("/no-such-page")
            .header(header::COOKIE, "lego-theme=light")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(response).await;
        assert!(html.contains(r#"<html lang="ru">"#));
        assert!(!html.contains(r#"class="dark""#));

        let response = test_app()
            .oneshot(get_request("/no-such-page"))
            .await
            .unwrap();
        assert!(body_text(response).await.contains(r#"<html lang="ru" class="dark">"#));
    }
}
