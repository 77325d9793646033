//! ESPN API wire layer: raw payload shapes and the HTTP transport.

pub mod http;
pub mod types;

pub use http::{param, EspnClient, RequestParams, Transport};
