use std::sync::Arc;

use tracing::warn;

use musa_core::{Classification, RawClassification};
use musa_llm::{LlmProvider, LlmRequest};

use crate::rules;

/// System instruction for the classification call.
const SYSTEM_INSTRUCTION: &str =
    "You are an expert at analyzing user questions and messages. \
     Analyze the given text and provide structured information about \
     the user's intent, sentiment, topic, and complexity level. \
     Be precise and concise in your analysis.";

/// Classification responses are small JSON objects.
const ANALYSIS_MAX_TOKENS: u32 = 512;

/// Classifies user messages with a remote model, falling back to the
/// deterministic rules when the call or its JSON payload is unusable.
pub struct MessageClassifier {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: f32,
}

impl MessageClassifier {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }

    /// Classify one message. Never fails: any remote or parse failure falls
    /// back to [`rules::classify`], and both paths produce fields coerced
    /// into their enumerations.
    pub async fn classify(&self, text: &str) -> Classification {
        let request = LlmRequest {
            model: self.model.clone(),
            prompt: Self::analysis_prompt(text),
            system: Some(SYSTEM_INSTRUCTION.into()),
            max_tokens: ANALYSIS_MAX_TOKENS,
            temperature: self.temperature,
            json_output: true,
        };

        match self.provider.complete(&request).await {
            Ok(response) => match serde_json::from_str::<RawClassification>(&response.text) {
                Ok(raw) => Classification::from_raw(raw),
                Err(e) => {
                    warn!(error = %e, "failed to parse classification JSON, using rule fallback");
                    rules::classify(text)
                }
            },
            Err(e) => {
                warn!(error = %e, "classification call failed, using rule fallback");
                rules::classify(text)
            }
        }
    }

    fn analysis_prompt(text: &str) -> String {
        format!(
            "Analyze the following user message and provide a JSON response with these fields:\n\
             - intent: The user's primary intent (e.g., \"question\", \"request\", \"greeting\", \"complaint\", \"compliment\")\n\
             - sentiment: The emotional tone (e.g., \"positive\", \"negative\", \"neutral\", \"curious\", \"frustrated\")\n\
             - topic: The main topic or subject area (e.g., \"product\", \"shipping\", \"payment\", \"general\")\n\
             - complexity: The complexity level (e.g., \"simple\", \"moderate\", \"complex\")\n\
             - keywords: Array of 3-5 key terms from the message\n\
             \n\
             User message: \"{text}\"\n\
             \n\
             Respond only with valid JSON."
        )
    }
}
