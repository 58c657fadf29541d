//! 会话状态机：维护聊天记录，并保证同一时间最多只有一个未完成的请求。
//!
//! Conversation state machine.
//!
//! Two states, [`ConversationState::Idle`] and [`ConversationState::Awaiting`].
//! [`Conversation::submit`] appends the user's message optimistically and
//! hands back a [`PendingTurn`]; the reply is appended by
//! [`Conversation::resolve`], which consumes that turn. The turn is move-only,
//! so each accepted submission gets exactly one assistant entry.
//!
//! The async driver that wires this to the mediator is [`ConciergeSession`].

pub mod session;

use tracing::{debug, warn};

use crate::types::ChatMessage;

pub use session::ConciergeSession;

/// Assistant entry every fresh transcript starts with.
pub const GREETING: &str =
    "Our bespoke concierge is ready. How may I refine your visual presence today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// No request outstanding; submissions are accepted.
    Idle,
    /// One request outstanding; submissions are ignored.
    Awaiting,
}

/// An accepted submission whose reply has not been appended yet.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending turn must be resolved to return the conversation to Idle"]
pub struct PendingTurn {
    utterance: String,
    seq: u64,
}

impl PendingTurn {
    /// The trimmed text to hand to the mediator.
    pub fn utterance(&self) -> &str {
        &self.utterance
    }
}

/// Append-only transcript plus the Idle/Awaiting gate.
#[derive(Debug, Clone)]
pub struct Conversation {
    transcript: Vec<ChatMessage>,
    state: ConversationState,
    seq: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_greeting(GREETING)
    }

    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(greeting)],
            state: ConversationState::Idle,
            seq: 0,
        }
    }

    /// Accept `input` if it has content and nothing is outstanding.
    ///
    /// Returns `None`, with no change at all, for blank input or while awaiting.
    pub fn submit(&mut self, input: &str) -> Option<PendingTurn> {
        let utterance = input.trim();
        if utterance.is_empty() {
            debug!("ignoring blank submission");
            return None;
        }
        if self.state == ConversationState::Awaiting {
            warn!("submission ignored while a reply is outstanding");
            return None;
        }

        self.transcript.push(ChatMessage::user(utterance));
        self.state = ConversationState::Awaiting;
        self.seq += 1;
        Some(PendingTurn {
            utterance: utterance.to_string(),
            seq: self.seq,
        })
    }

    /// Append the assistant reply for `turn` and return to Idle.
    ///
    /// Returns false, leaving the transcript untouched, if `turn` is not the
    /// one this conversation is awaiting.
    #[must_use = "a rejected turn leaves the transcript unchanged"]
    pub fn resolve(&mut self, turn: PendingTurn, reply: impl Into<String>) -> bool {
        if self.state != ConversationState::Awaiting || turn.seq != self.seq {
            warn!(turn = turn.seq, current = self.seq, "reply for a turn that is not outstanding");
            return false;
        }
        self.transcript.push(ChatMessage::assistant(reply));
        self.state = ConversationState::Idle;
        true
    }

    /// Oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == ConversationState::Awaiting
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
