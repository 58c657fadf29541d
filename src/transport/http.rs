use crate::client::error_classification::classify_status;
use crate::config::ConciergeConfig;
use crate::error::Error;
use crate::Result;
use reqwest::Proxy;
use tracing::debug;

/// Header carrying the credential for Gemini's REST API.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest slice of an error body kept in `Error::Remote`.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ConciergeConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = config.http_timeout() {
            builder = builder.timeout(timeout);
        }

        if let Some(ref proxy_url) = config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body and return the decoded JSON response.
    ///
    /// Non-2xx statuses become `Error::Remote` with a classified error class.
    pub async fn post_json(
        &self,
        path: &str,
        api_key: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "dispatching generation request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                class: classify_status(status.as_u16()).to_string(),
                message: remote_message(&text),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

/// Prefer the provider's `error.message`, else a bounded slice of the raw body.
fn remote_message(body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = v.pointer("/error/message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
    }
    body.chars().take(MAX_ERROR_BODY).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}
