use crate::client::mediator::AdviceMediator;
use crate::config::ConciergeConfig;
use crate::credential::{CredentialResolver, EnvCredentialResolver};
use crate::drivers::{GeminiBackend, GenerationBackend};
use crate::Result;
use std::sync::Arc;

/// Builder for creating a mediator with custom configuration.
///
/// Anything not set falls back to production wiring: the environment
/// credential named by the config and the Gemini HTTP backend.
pub struct AdviceMediatorBuilder {
    config: ConciergeConfig,
    credentials: Option<Arc<dyn CredentialResolver>>,
    backend: Option<Arc<dyn GenerationBackend>>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl AdviceMediatorBuilder {
    pub fn new() -> Self {
        Self {
            config: ConciergeConfig::default(),
            credentials: None,
            backend: None,
            base_url_override: None,
        }
    }

    pub fn config(mut self, config: ConciergeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Inject the credential source. Default reads `config.credential_var`.
    pub fn credentials(mut self, resolver: Arc<dyn CredentialResolver>) -> Self {
        self.credentials = Some(resolver);
        self
    }

    /// Inject the generation backend. Default is Gemini over HTTP.
    pub fn backend(mut self, backend: Arc<dyn GenerationBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Override the configured base URL.
    ///
    /// This is primarily for testing with mock servers.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<AdviceMediator> {
        let mut config = self.config;
        if let Some(base_url) = self.base_url_override {
            config.base_url = base_url;
        }
        config.validate()?;

        let credentials = match self.credentials {
            Some(c) => c,
            None => Arc::new(EnvCredentialResolver::with_var(config.credential_var.clone())),
        };
        let backend = match self.backend {
            Some(b) => b,
            None => Arc::new(GeminiBackend::new(&config)?),
        };

        Ok(AdviceMediator::new(credentials, backend, config.model))
    }
}

impl Default for AdviceMediatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
