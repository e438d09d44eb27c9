//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded in the span, Sentry scope and response)
//! 4. Security headers (CSP, frame and referrer policy, etc.)
//! 5. Rate limiting (governor), newsletter route only

pub mod rate_limit;
pub mod request_id;
pub mod security_headers;

pub use rate_limit::newsletter_rate_limiter;
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
