//! HTTP transport for the NanoGPT API.

mod http;

pub use http::{HttpTransport, DEFAULT_BASE_URL};
