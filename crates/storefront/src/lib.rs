//! LEGO Store storefront library.
//!
//! This crate provides the landing page as a library, allowing it to be
//! tested and reused. The binary in `main.rs` adds configuration loading,
//! Sentry, and the listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod faq;
pub mod filters;
pub mod icons;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod theme;
