//! Core utilities for the ESPN Fantasy Football model layer
//!
//! - `cache`: identity cache that keeps one shared instance per model key
//! - `http`: request headers common to every ESPN call

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{IdentityCache, DEFAULT_CAPACITY};
pub use http::common_headers;
