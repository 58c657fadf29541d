//! Styling advice mediator and its builder.
//!
//! The mediator is the only component that talks to the generation backend;
//! the conversation layer calls it and appends whatever text it returns.

pub mod builder;
pub(crate) mod error_classification;
pub mod mediator;

pub use builder::AdviceMediatorBuilder;
pub use mediator::{AdviceMediator, FALLBACK_MESSAGE, OFFLINE_MESSAGE, PERSONA, TEMPERATURE};
