use async_trait::async_trait;
use musa_core::Result;
use serde::{Deserialize, Serialize};

/// A request to an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The model to use, e.g. "gemini-2.5-flash".
    pub model: String,
    /// The assembled prompt text.
    pub prompt: String,
    /// System instruction (separate from the prompt for providers that support it).
    pub system: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Temperature.
    pub temperature: f32,
    /// Constrain the model to emit a JSON object, where the API supports it.
    pub json_output: bool,
}

/// A complete response from an LLM.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub usage: Usage,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Trait implemented by each LLM provider (Gemini, mock, etc.)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Human-readable name, e.g. "gemini"
    fn name(&self) -> &str;

    /// List available models.
    fn models(&self) -> Vec<String>;

    /// Send a request and wait for the complete response.
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse>;

    /// Check if this provider is configured / reachable.
    async fn health_check(&self) -> Result<()>;
}
