//! Light/dark display mode store.
//!
//! The preference is read once per request from persisted storage, held in a
//! [`ThemeStore`], and written back on every mutation. Storage is injected
//! through [`PreferenceStorage`]: handlers get a cookie-backed store via the
//! axum extractor, tests use an in-memory map.
//!
//! Missing or corrupt persisted values fall back to
//! [`ThemePreference::Dark`]; reading a preference never fails.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use lego_store_core::ThemePreference;
use tokio::sync::watch;

use crate::state::AppState;

/// Fixed key the preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "lego-theme";

/// Cookie lifetime for the persisted preference (one year).
const THEME_COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Key-value storage for visitor preferences.
///
/// Mirrors browser local storage: string keys, string values, no failure
/// reporting.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// Preference storage backed by the request's cookies.
///
/// Writes are collected in the jar and sent back as `Set-Cookie` headers once
/// the jar is returned from the handler.
#[derive(Debug, Clone)]
pub struct CookieStorage {
    jar: CookieJar,
    secure: bool,
}

impl CookieStorage {
    #[must_use]
    pub const fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    /// The jar with any pending writes, ready to be returned as a response part.
    #[must_use]
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStorage for CookieStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_owned())
    }

    fn set_item(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_owned(), value.to_owned()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(self.secure)
            .max_age(time::Duration::days(THEME_COOKIE_MAX_AGE_DAYS));

        let jar = std::mem::replace(&mut self.jar, CookieJar::new());
        self.jar = jar.add(cookie);
    }
}

/// The visitor's display mode, bound to the storage it was loaded from.
///
/// Dependents that need to react to changes call [`ThemeStore::subscribe`];
/// every [`ThemeStore::set`] is visible to them.
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    current: watch::Sender<ThemePreference>,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    /// Read the persisted preference, defaulting to dark.
    pub fn load(storage: S) -> Self {
        let current = match storage.get_item(THEME_STORAGE_KEY) {
            None => ThemePreference::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "Ignoring unreadable stored theme");
                ThemePreference::default()
            }),
        };

        Self {
            storage,
            current: watch::Sender::new(current),
        }
    }

    #[must_use]
    pub fn get(&self) -> ThemePreference {
        *self.current.borrow()
    }

    /// Persist `pref` and notify subscribers.
    pub fn set(&mut self, pref: ThemePreference) {
        self.storage.set_item(THEME_STORAGE_KEY, pref.as_str());
        self.current.send_replace(pref);
    }

    /// Flip the mode, persist it, and return the new value.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.get().toggled();
        self.set(next);
        next
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ThemePreference> {
        self.current.subscribe()
    }

    /// Give back the storage, including any writes made through the store.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl FromRequestParts<AppState> for ThemeStore<CookieStorage> {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let storage = CookieStorage::new(jar, state.config().secure_cookies());
        Ok(Self::load(storage))
    }
}
