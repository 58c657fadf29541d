use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use crate::client::{AdviceMediator, FALLBACK_MESSAGE};
use crate::conversation::{Conversation, ConversationState, PendingTurn};
use crate::types::ChatMessage;

/// Async driver joining a [`Conversation`] to an [`AdviceMediator`].
///
/// This is the surface a chat view binds to: `send` for input, `transcript`
/// for rendering and `is_awaiting` for disabling the input while a reply is
/// outstanding. The transcript lock is never held across the remote call, so
/// readers never block on the network.
///
/// `send` is cancel-safe: if its future is dropped mid-call (a host timeout,
/// an aborted task, a losing `select!` branch) the outstanding turn is closed
/// with the fallback copy and the conversation returns to Idle.
#[derive(Debug)]
pub struct ConciergeSession {
    conversation: Mutex<Conversation>,
    mediator: AdviceMediator,
}

impl ConciergeSession {
    pub fn new(mediator: AdviceMediator) -> Self {
        Self::with_conversation(mediator, Conversation::new())
    }

    pub fn with_conversation(mediator: AdviceMediator, conversation: Conversation) -> Self {
        Self {
            conversation: Mutex::new(conversation),
            mediator,
        }
    }

    /// Submit `input` and wait for the reply.
    ///
    /// Returns the appended assistant text, or `None` when the submission was
    /// blank or another reply is still outstanding.
    pub async fn send(&self, input: &str) -> Option<String> {
        let turn = self.lock().submit(input)?;
        let guard = OpenTurn {
            conversation: &self.conversation,
            turn: Some(turn),
        };
        info!(chars = guard.utterance().chars().count(), "consulting concierge");

        let reply = self.mediator.get_advice(guard.utterance()).await;

        if !guard.close(reply.clone()) {
            return None;
        }
        Some(reply)
    }

    /// Snapshot of the transcript, oldest first.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.lock().transcript().to_vec()
    }

    pub fn state(&self) -> ConversationState {
        self.lock().state()
    }

    pub fn is_awaiting(&self) -> bool {
        self.lock().is_awaiting()
    }

    pub fn mediator(&self) -> &AdviceMediator {
        &self.mediator
    }

    fn lock(&self) -> MutexGuard<'_, Conversation> {
        lock_conversation(&self.conversation)
    }
}

// The conversation is only mutated through submit/resolve, which leave it
// consistent even if a holder panicked.
fn lock_conversation(conversation: &Mutex<Conversation>) -> MutexGuard<'_, Conversation> {
    conversation.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Holds the outstanding turn while the mediator runs.
struct OpenTurn<'a> {
    conversation: &'a Mutex<Conversation>,
    turn: Option<PendingTurn>,
}

impl OpenTurn<'_> {
    fn utterance(&self) -> &str {
        self.turn.as_ref().map(PendingTurn::utterance).unwrap_or_default()
    }

    fn close(mut self, reply: String) -> bool {
        match self.turn.take() {
            Some(turn) => lock_conversation(self.conversation).resolve(turn, reply),
            None => false,
        }
    }
}

impl Drop for OpenTurn<'_> {
    fn drop(&mut self) {
        if let Some(turn) = self.turn.take() {
            warn!("reply abandoned before it arrived, closing turn with fallback copy");
            let _ = lock_conversation(self.conversation).resolve(turn, FALLBACK_MESSAGE);
        }
    }
}
