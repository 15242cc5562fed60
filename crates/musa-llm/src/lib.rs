//! # musa-llm
//!
//! Abstraction layer over the hosted LLM API. One production adapter
//! (Gemini) plus a mock provider for deterministic tests. Calls are
//! single-shot and blocking per request; there is no streaming path.

pub mod gemini;
pub mod mock;
pub mod provider;

pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use provider::{LlmProvider, LlmRequest, LlmResponse, Usage};
