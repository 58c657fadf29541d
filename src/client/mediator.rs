use std::sync::Arc;

use tracing::{debug, error, info};

use crate::client::builder::AdviceMediatorBuilder;
use crate::config::ConciergeConfig;
use crate::credential::CredentialResolver;
use crate::drivers::GenerationBackend;
use crate::types::{AdviceOutcome, AdviceRequest};
use crate::Result;

/// Brand voice sent as the system instruction on every request.
pub const PERSONA: &str = "You are an elite, sophisticated AI fashion concierge for 'LUX-100', a brand selling sunglasses limited to only 100 pieces worldwide. Your tone is refined, futuristic, and exclusive. You help ultra-wealthy clients decide if they are ready for the 'Aethelgard' series. Keep responses concise, poetic, and highly luxurious. Use words like 'transcendence', 'legacy', 'sovereignty'.";

/// Sampling temperature; favours varied phrasing over determinism.
pub const TEMPERATURE: f64 = 0.9;

/// Shown when no credential is configured.
pub const OFFLINE_MESSAGE: &str =
    "Our exclusive concierge is momentarily offline. However, your elegance remains unquestioned.";

/// Shown when the remote call was attempted and failed.
pub const FALLBACK_MESSAGE: &str =
    "The stars are aligning for your vision. Our craftsmen await your command.";

/// Decides what the chat shows for a user utterance.
///
/// Stateless between calls: the credential is resolved per utterance and the
/// backend is called at most once. No error ever leaves this type.
#[derive(Debug, Clone)]
pub struct AdviceMediator {
    credentials: Arc<dyn CredentialResolver>,
    backend: Arc<dyn GenerationBackend>,
    model: String,
}

impl AdviceMediator {
    pub fn new(
        credentials: Arc<dyn CredentialResolver>,
        backend: Arc<dyn GenerationBackend>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            backend,
            model: model.into(),
        }
    }

    pub fn builder() -> AdviceMediatorBuilder {
        AdviceMediatorBuilder::new()
    }

    /// Production wiring: environment config, environment credential, Gemini over HTTP.
    pub fn from_env() -> Result<Self> {
        AdviceMediatorBuilder::new()
            .config(ConciergeConfig::from_env()?)
            .build()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify the answer to `utterance` without flattening it to text.
    pub async fn consult(&self, utterance: &str) -> AdviceOutcome {
        let api_key = self.credentials.resolve();
        if api_key.is_empty() {
            info!("no credential configured, answering offline");
            return AdviceOutcome::Offline;
        }

        let request = AdviceRequest {
            api_key,
            model: self.model.clone(),
            system_instruction: PERSONA.to_string(),
            temperature: TEMPERATURE,
            contents: utterance.to_string(),
        };
        debug!(model = %request.model, temperature = request.temperature, "requesting styling advice");

        match self.backend.generate(&request).await {
            Ok(text) => AdviceOutcome::Success(text),
            Err(e) => {
                error!(class = e.class(), error = %e, "styling advice request failed");
                AdviceOutcome::Fallback
            }
        }
    }

    /// Displayable reply for `utterance`: model text, offline copy or fallback copy.
    pub async fn get_advice(&self, utterance: &str) -> String {
        self.consult(utterance).await.into_text()
    }
}
