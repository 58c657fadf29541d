//! Gemini Generate API 驱动 — 构造 generateContent 请求并解析响应文本
//!
//! Google Gemini generateContent API driver. Key points:
//! - The persona travels as top-level `system_instruction`, not as a message.
//! - The utterance is the single `user` entry in `contents`.
//! - `generationConfig` carries the temperature.
//! - Response text is the concatenation of `candidates[0].content.parts[*].text`.
//! - The API key goes in the `x-goog-api-key` header (see the transport).

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ConciergeConfig;
use crate::error::{Error, ErrorContext};
use crate::transport::HttpTransport;
use crate::types::AdviceRequest;
use crate::Result;

use super::{DriverRequest, GenerationBackend};

/// Google Gemini generateContent request/response mapping.
#[derive(Debug, Clone, Default)]
pub struct GeminiDriver;

impl GeminiDriver {
    pub fn new() -> Self {
        Self
    }

    pub fn build_request(&self, request: &AdviceRequest) -> DriverRequest {
        let body = serde_json::json!({
            "system_instruction": {
                "parts": [{ "text": request.system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.contents }]
            }],
            "generationConfig": {
                "temperature": request.temperature
            }
        });

        DriverRequest {
            path: format!("/v1beta/models/{}:generateContent", request.model),
            body,
        }
    }

    /// Extract the generated text from a non-streaming response.
    pub fn parse_response(&self, body: &Value) -> Result<String> {
        if let Some(msg) = body.pointer("/error/message").and_then(|m| m.as_str()) {
            return Err(Error::malformed_with_context(
                "provider returned an error body",
                ErrorContext::new()
                    .with_field_path("error.message")
                    .with_details(msg)
                    .with_source("gemini_driver"),
            ));
        }

        let parts = body
            .pointer("/candidates/0/content/parts")
            .and_then(|p| p.as_array())
            .ok_or_else(|| {
                let details = body
                    .pointer("/promptFeedback/blockReason")
                    .or_else(|| body.pointer("/candidates/0/finishReason"))
                    .and_then(|r| r.as_str())
                    .unwrap_or("no candidates");
                Error::malformed_with_context(
                    "response carries no content parts",
                    ErrorContext::new()
                        .with_field_path("candidates[0].content.parts")
                        .with_details(details)
                        .with_source("gemini_driver"),
                )
            })?;

        // Thought parts are model reasoning, not reply text.
        let texts: Vec<&str> = parts
            .iter()
            .filter(|p| !p.get("thought").and_then(|t| t.as_bool()).unwrap_or(false))
            .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
            .collect();

        if texts.is_empty() {
            return Err(Error::malformed_with_context(
                "response carries no text parts",
                ErrorContext::new()
                    .with_field_path("candidates[0].content.parts")
                    .with_source("gemini_driver"),
            ));
        }

        Ok(texts.concat())
    }
}

/// [`GenerationBackend`] over HTTP to the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    driver: GeminiDriver,
    transport: HttpTransport,
}

impl GeminiBackend {
    pub fn new(config: &ConciergeConfig) -> Result<Self> {
        Ok(Self {
            driver: GeminiDriver::new(),
            transport: HttpTransport::new(config)?,
        })
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, request: &AdviceRequest) -> Result<String> {
        let req = self.driver.build_request(request);
        let body = self
            .transport
            .post_json(&req.path, &request.api_key, &req.body)
            .await?;
        self.driver.parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> AdviceRequest {
        AdviceRequest {
            api_key: "k".into(),
            model: "gemini-3-flash-preview".into(),
            system_instruction: "Be refined.".into(),
            temperature: 0.9,
            contents: "Which frame suits a boardroom presence?".into(),
        }
    }

    #[test]
    fn test_gemini_build_request() {
        let req = GeminiDriver::new().build_request(&sample_request());
        assert_eq!(
            req.path,
            "/v1beta/models/gemini-3-flash-preview:generateContent"
        );
        assert_eq!(
            req.body["system_instruction"]["parts"][0]["text"],
            "Be refined."
        );
        assert_eq!(req.body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(req.body["contents"][0]["role"], "user");
        assert_eq!(
            req.body["contents"][0]["parts"][0]["text"],
            "Which frame suits a boardroom presence?"
        );
        assert_eq!(req.body["generationConfig"]["temperature"], 0.9);
    }

    #[test]
    fn test_build_request_never_carries_key() {
        let req = GeminiDriver::new().build_request(&sample_request());
        assert!(!req.body.to_string().contains("\"k\""));
        assert!(!req.path.contains("key="));
    }

    #[test]
    fn test_gemini_parse_response() {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{"text": "The Obsidian "}, {"text": "speaks before you do."}], "role": "model" },
                "finishReason": "STOP"
            }]
        });
        let text = GeminiDriver::new().parse_response(&body).unwrap();
        assert_eq!(text, "The Obsidian speaks before you do.");
    }

    #[test]
    fn test_parse_skips_thought_parts() {
        let body = serde_json::json!({
            "candidates": [{
                "content": { "parts": [
                    {"text": "considering...", "thought": true},
                    {"text": "Sovereignty suits you."}
                ]}
            }]
        });
        assert_eq!(
            GeminiDriver::new().parse_response(&body).unwrap(),
            "Sovereignty suits you."
        );
    }

    #[test]
    fn test_parse_blocked_prompt_is_malformed() {
        let body = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = GeminiDriver::new().parse_response(&body).unwrap_err();
        assert_eq!(err.class(), "malformed_response");
        assert_eq!(
            err.context().unwrap().details.as_deref(),
            Some("SAFETY")
        );
    }

    #[test]
    fn test_parse_no_text_parts_is_malformed() {
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": [{"functionCall": {"name": "f"}}] } }]
        });
        assert!(matches!(
            GeminiDriver::new().parse_response(&body),
            Err(Error::MalformedResponse { .. })
        ));
    }
}
