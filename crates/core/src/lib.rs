//! LEGO Store Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront binary and its
//! integration tests.
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! templates. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Display mode preference, product IDs, prices and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
