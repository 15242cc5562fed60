//! # musa-runtime
//!
//! The chat engine: a session-scoped context object owning the classifier,
//! the response generator, and the conversation memory, plus the
//! classify → generate → record control flow for each user message.

pub mod generator;
pub mod session;

pub use generator::{DEFAULT_SYSTEM_INSTRUCTION, ResponseGenerator};
pub use session::{ChatReply, ChatSession};
