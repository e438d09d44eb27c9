//! Display mode route handlers.
//!
//! Both handlers persist the new preference in the `lego-theme` cookie and
//! redirect back to the landing page, so the switch works as a plain form post.

use axum::{
    Form,
    response::{IntoResponse, Redirect},
};
use lego_store_core::ThemePreference;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::theme::{CookieStorage, ThemeStore};

/// Explicit theme form data.
#[derive(Debug, Deserialize)]
pub struct SetThemeForm {
    pub theme: String,
}

/// Flip between light and dark.
#[instrument(skip(store))]
pub async fn toggle(mut store: ThemeStore<CookieStorage>) -> impl IntoResponse {
    let theme = store.toggle();
    add_breadcrumb("theme", "Toggled display mode", Some(&[("theme", theme.as_str())]));
    tracing::info!(theme = %theme, "Theme toggled");

    (store.into_storage().into_jar(), Redirect::to("/"))
}

/// Set a specific mode.
///
/// Only `light` and `dark` are accepted; anything else is a 400.
#[instrument(skip(store), fields(theme = %form.theme))]
pub async fn set(
    mut store: ThemeStore<CookieStorage>,
    Form(form): Form<SetThemeForm>,
) -> Result<impl IntoResponse> {
    let theme: ThemePreference = form
        .theme
        .parse()
        .map_err(|e: lego_store_core::ThemeParseError| AppError::BadRequest(e.to_string()))?;

    store.set(theme);
    add_breadcrumb("theme", "Set display mode", Some(&[("theme", theme.as_str())]));
    tracing::info!(theme = %theme, "Theme set");

    Ok((store.into_storage().into_jar(), Redirect::to("/")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::catalog::Catalog;
    use crate::config::StorefrontConfig;
    use crate::state::AppState;

    fn app(config: StorefrontConfig) -> Router {
        crate::routes::app(AppState::new(config, Catalog::lego_store()))
    }

    fn post(uri: &str, cookie: Option<&str>, form: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        match form {
            Some(form) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    fn set_cookie(response: &axum::response::Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_toggle_without_cookie_sets_light() {
        let response = app(StorefrontConfig::default())
            .oneshot(post("/theme/toggle", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

        let cookie = set_cookie(&response);
        assert!(cookie.starts_with("lego-theme=light"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(!cookie.contains("Secure"));
    }

    #[tokio::test]
    async fn test_toggle_from_light_sets_dark() {
        let response = app(StorefrontConfig::default())
            .oneshot(post("/theme/toggle", Some("lego-theme=light"), None))
            .await
            .unwrap();

        assert!(set_cookie(&response).starts_with("lego-theme=dark"));
    }

    #[tokio::test]
    async fn test_https_base_url_marks_cookie_secure() {
        let config = StorefrontConfig {
            base_url: "https://lego.example.ru".to_string(),
            ..StorefrontConfig::default()
        };
        let response = app(config)
            .oneshot(post("/theme/toggle", None, None))
            .await
            .unwrap();

        assert!(set_cookie(&response).contains("Secure"));
    }

    #[tokio::test]
    async fn test_set_explicit_theme() {
        let response = app(StorefrontConfig::default())
            .oneshot(post("/theme", Some("lego-theme=light"), Some("theme=dark")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(set_cookie(&response).starts_with("lego-theme=dark"));
    }

    #[tokio::test]
    async fn test_set_rejects_unknown_theme() {
        let response = app(StorefrontConfig::default())
            .oneshot(post("/theme", None, Some("theme=sepia")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
