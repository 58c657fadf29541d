//! HTTP transport to the generation API.

pub mod http;

pub use http::{HttpTransport, TransportError};
