//! Web app manifest route handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Brand red, used for the browser chrome.
const THEME_COLOR: &str = "#ef4444";
/// Page background in dark mode, the default theme.
const BACKGROUND_COLOR: &str = "#020617";

/// Serve the web app manifest.
pub async fn webmanifest(State(state): State<AppState>) -> Response {
    let base = &state.config().base_url;

    let manifest = serde_json::json!({
        "name": "LEGO Store",
        "short_name": "LEGO Store",
        "lang": "ru",
        "start_url": format!("{base}/"),
        "icons": [
            {
                "src": "/static/favicon.svg",
                "sizes": "any",
                "type": "image/svg+xml"
            }
        ],
        "theme_color": THEME_COLOR,
        "background_color": BACKGROUND_COLOR,
        "display": "standalone"
    });

    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        manifest.to_string(),
    )
        .into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::Catalog;
    use crate::config::StorefrontConfig;

    #[tokio::test]
    async fn test_manifest_uses_base_url() {
        let config = StorefrontConfig {
            base_url: "https://lego.example.ru".to_string(),
            ..StorefrontConfig::default()
        };
        let app = crate::routes::app(AppState::new(config, Catalog::lego_store()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/site.webmanifest")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/manifest+json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let manifest: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(manifest["start_url"], "https://lego.example.ru/");
        assert_eq!(manifest["display"], "standalone");
    }
}
