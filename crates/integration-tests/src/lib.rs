//! Integration tests for the LEGO Store storefront.
//!
//! Each test starts the full storefront router on an ephemeral local port and
//! talks to it over HTTP with `reqwest`, so cookies, redirects and the
//! middleware stack behave as they do for a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lego-store-integration-tests
//! ```

use std::net::SocketAddr;
use std::path::Path;

use lego_store_storefront::catalog::Catalog;
use lego_store_storefront::config::StorefrontConfig;
use lego_store_storefront::routes;
use lego_store_storefront::state::AppState;
use reqwest::Client;
use tokio::net::TcpListener;

/// A storefront served on `127.0.0.1` for the lifetime of the test runtime.
pub struct TestServer {
    pub addr: SocketAddr,
}

impl TestServer {
    /// Start a storefront with the default local configuration, serving the
    /// storefront crate's static directory.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start() -> Self {
        Self::start_with(StorefrontConfig {
            static_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("../storefront/static"),
            ..StorefrontConfig::default()
        })
        .await
    }

    /// Start a storefront with `config`; its host and port are ignored.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start_with(config: StorefrontConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local address");

        let app = routes::app(AppState::new(config, Catalog::lego_store()));
        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        Self { addr }
    }

    /// Absolute URL for `path` on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// A client that keeps cookies between requests, like a browser.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn browser() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
