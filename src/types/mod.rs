//! 类型系统模块：聊天记录与咨询请求的核心数据类型。
//!
//! # Types Module
//!
//! Core data types shared by the mediator, the drivers and the conversation.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ChatMessage`] | One transcript entry with role and content |
//! | [`ChatRole`] | Transcript role (user, assistant) |
//! | [`AdviceRequest`] | A single generation call as handed to a backend |
//! | [`AdviceOutcome`] | Which branch the mediator took for an utterance |
//!
//! ## Example
//!
//! ```rust
//! use lux_concierge::types::{ChatMessage, ChatRole};
//!
//! let greeting = ChatMessage::assistant("How may I refine your visual presence today?");
//! assert_eq!(greeting.role, ChatRole::Assistant);
//! ```

pub mod advice;
pub mod message;

pub use advice::{AdviceOutcome, AdviceRequest};
pub use message::{ChatMessage, ChatRole};
