//! 配置模块：模型、端点与传输参数，支持 YAML 与环境变量覆盖。
//!
//! Concierge configuration. Defaults reproduce the production setup; a YAML
//! document and then environment variables may override individual fields:
//!
//! - `LUX_MODEL` — model identifier
//! - `LUX_BASE_URL` — generation API base URL
//! - `LUX_CREDENTIAL_VAR` — name of the variable holding the API key
//! - `LUX_HTTP_TIMEOUT_SECS` — opt-in per-request timeout
//! - `LUX_PROXY_URL` — HTTP(S) proxy

use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::credential::DEFAULT_CREDENTIAL_VAR;
use crate::error::{Error, ErrorContext};
use crate::Result;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConciergeConfig {
    pub model: String,
    pub base_url: String,
    pub credential_var: String,
    /// No timeout unless set: a stalled call stalls the chat until it settles.
    pub http_timeout_secs: Option<u64>,
    pub proxy_url: Option<String>,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            credential_var: DEFAULT_CREDENTIAL_VAR.to_string(),
            http_timeout_secs: None,
            proxy_url: None,
        }
    }
}

impl ConciergeConfig {
    /// Parse a YAML document; missing keys keep their defaults.
    pub fn from_yaml_str(doc: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(doc)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overlaid with environment overrides.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(model) = non_empty_var("LUX_MODEL") {
            self.model = model;
        }
        if let Some(base_url) = non_empty_var("LUX_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(var) = non_empty_var("LUX_CREDENTIAL_VAR") {
            self.credential_var = var;
        }
        if let Some(raw) = non_empty_var("LUX_HTTP_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    "timeout must be a whole number of seconds",
                    ErrorContext::new()
                        .with_field_path("LUX_HTTP_TIMEOUT_SECS")
                        .with_details(raw.clone())
                        .with_source("config_loader"),
                )
            })?;
            self.http_timeout_secs = Some(secs);
        }
        if let Some(proxy) = non_empty_var("LUX_PROXY_URL") {
            self.proxy_url = Some(proxy);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "model identifier must not be empty",
                ErrorContext::new()
                    .with_field_path("model")
                    .with_source("config_loader"),
            ));
        }
        if self.credential_var.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "credential variable name must not be empty",
                ErrorContext::new()
                    .with_field_path("credential_var")
                    .with_source("config_loader"),
            ));
        }
        check_url("base_url", &self.base_url)?;
        if let Some(ref proxy) = self.proxy_url {
            check_url("proxy_url", proxy)?;
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn check_url(field: &str, raw: &str) -> Result<()> {
    let parsed = url::Url::parse(raw).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid URL: {}", e),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(raw)
                .with_source("config_loader"),
        )
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::configuration_with_context(
            format!("unsupported URL scheme '{}'", other),
            ErrorContext::new()
                .with_field_path(field)
                .with_source("config_loader"),
        )),
    }
}
