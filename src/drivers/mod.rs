//! 生成后端抽象层 — 中介器通过 trait 调用远端文本生成服务
//!
//! Generation backend abstraction. The mediator only sees
//! [`GenerationBackend`]; the production implementation is
//! [`GeminiBackend`], which pairs the stateless [`GeminiDriver`] (request
//! building and response parsing) with an [`HttpTransport`](crate::transport::HttpTransport).

pub mod gemini;

use async_trait::async_trait;
use serde_json::Value;

use crate::types::AdviceRequest;
use crate::Result;

pub use gemini::{GeminiBackend, GeminiDriver};

/// Provider request ready for the transport.
#[derive(Debug, Clone)]
pub struct DriverRequest {
    /// Path appended to the base URL, model already interpolated.
    pub path: String,
    /// Serialized JSON request body.
    pub body: Value,
}

/// Performs one remote generation call.
///
/// Implementations return the generated text or an error; they never retry.
/// Object-safe so hosts and tests can inject their own via `Arc<dyn GenerationBackend>`.
#[async_trait]
pub trait GenerationBackend: Send + Sync + std::fmt::Debug {
    async fn generate(&self, request: &AdviceRequest) -> Result<String>;
}
