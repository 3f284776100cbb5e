//! HTTP handlers
//!
//! Axum request handlers for the feed endpoint.

pub mod rss;

pub use rss::get_rss;
