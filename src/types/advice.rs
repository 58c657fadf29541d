//! The request handed to a generation backend and the mediator's outcome.

use std::fmt;

/// A single generation call.
///
/// Built fresh for every utterance and dropped once the backend answers.
#[derive(Clone, PartialEq)]
pub struct AdviceRequest {
    /// Credential resolved for this call. Never empty when a request exists.
    pub api_key: String,
    pub model: String,
    pub system_instruction: String,
    pub temperature: f64,
    /// The user's utterance, sent as the only content.
    pub contents: String,
}

impl fmt::Debug for AdviceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdviceRequest")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("system_instruction", &self.system_instruction)
            .field("temperature", &self.temperature)
            .field("contents", &self.contents)
            .finish()
    }
}

/// Branch taken by the mediator for one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceOutcome {
    /// No credential configured; nothing was sent.
    Offline,
    /// The backend answered with this text.
    Success(String),
    /// The backend was called and failed.
    Fallback,
}

impl AdviceOutcome {
    /// Displayable copy for this outcome.
    pub fn into_text(self) -> String {
        match self {
            AdviceOutcome::Offline => crate::client::OFFLINE_MESSAGE.to_string(),
            AdviceOutcome::Success(text) => text,
            AdviceOutcome::Fallback => crate::client::FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AdviceOutcome::Success(_))
    }
}
