//! # lux-concierge
//!
//! LUX-100 造型顾问核心：凭据解析、基于 Gemini 的建议生成以及聊天会话状态机。
//!
//! Styling advice concierge for the LUX-100 storefront. The chat widget on the
//! site is a thin view over this crate: it forwards visitor text here and
//! renders whatever comes back.
//!
//! ## Core Behaviour
//!
//! - **Never an error on screen**: [`AdviceMediator::get_advice`] always yields
//!   displayable text. No credential gives the offline copy, a failed remote
//!   call gives the fallback copy, a successful call gives the model's text
//!   verbatim.
//! - **One request at a time**: [`Conversation`] gates submissions while a
//!   reply is outstanding and appends exactly one assistant entry per accepted
//!   submission.
//! - **Fresh credentials**: the API key is read from the environment on every
//!   call; nothing is cached.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lux_concierge::{AdviceMediator, ConciergeSession};
//!
//! #[tokio::main]
//! async fn main() -> lux_concierge::Result<()> {
//!     let session = ConciergeSession::new(AdviceMediator::from_env()?);
//!
//!     if let Some(reply) = session.send("Which frame suits a boardroom presence?").await {
//!         println!("{reply}");
//!     }
//!     assert_eq!(session.transcript().len(), 3);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`credential`] | API key resolution from the process environment |
//! | [`client`] | The advice mediator and its builder |
//! | [`conversation`] | Transcript state machine and async session |
//! | [`drivers`] | Generation backend trait and the Gemini driver |
//! | [`transport`] | HTTP transport to the generation API |
//! | [`config`] | Model, endpoint and transport configuration |
//! | [`types`] | Chat messages, advice requests and outcomes |

pub mod client;
pub mod config;
pub mod conversation;
pub mod credential;
pub mod drivers;
pub mod transport;
pub mod types;

pub use client::{AdviceMediator, AdviceMediatorBuilder, FALLBACK_MESSAGE, OFFLINE_MESSAGE};
pub use config::ConciergeConfig;
pub use conversation::{ConciergeSession, Conversation, ConversationState, PendingTurn, GREETING};
pub use credential::{CredentialResolver, EnvCredentialResolver, StaticCredential};
pub use drivers::{GeminiBackend, GenerationBackend};
pub use types::{AdviceOutcome, AdviceRequest, ChatMessage, ChatRole};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
