use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use musa_classifier::{MessageClassifier, PatternSummary, aggregate_patterns};
use musa_config::MusaConfig;
use musa_core::{Classification, MusaError, Result};
use musa_llm::LlmProvider;
use musa_memory::{ConversationMemory, Preferences};

use crate::generator::{DEFAULT_SYSTEM_INSTRUCTION, ResponseGenerator};

/// One processed exchange.
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// Assistant-styled text shown to the user — a generated response or a
    /// rendered error message.
    pub text: String,
    /// Classification of the user message.
    pub analysis: Classification,
    /// Whether the exchange was recorded in memory. Failed generations are not.
    pub recorded: bool,
}

/// Session-scoped chat context: classifier, generator, and memory bundled
/// behind one handle whose lifecycle is tied to the session.
pub struct ChatSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    provider: Arc<dyn LlmProvider>,
    classifier: MessageClassifier,
    generator: ResponseGenerator,
    memory: ConversationMemory,
    context_window: usize,
}

impl ChatSession {
    /// Wire a session from config. The provider is shared between the
    /// classifier and the generator.
    pub fn new(config: &MusaConfig, provider: Arc<dyn LlmProvider>) -> Result<Self> {
        let system_instruction = resolve_system_instruction(config)?;
        let classifier = MessageClassifier::new(
            Arc::clone(&provider),
            config.assistant.analysis_model.clone(),
            config.assistant.analysis_temperature,
        );
        let generator = ResponseGenerator::new(
            Arc::clone(&provider),
            config.assistant.model.clone(),
            system_instruction,
            config.assistant.max_tokens,
            config.assistant.temperature,
        );
        let memory = ConversationMemory::open(&config.memory.file_path, config.memory.capacity);

        let id = Uuid::new_v4();
        info!(session = %id, "chat session created");
        Ok(Self {
            id,
            created_at: Utc::now(),
            provider,
            classifier,
            generator,
            memory,
            context_window: config.memory.context_window,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Process one user message: classify, generate against the context
    /// window, record the exchange. A failed generation is rendered as an
    /// assistant-styled error message and is not recorded.
    pub async fn handle_message(&mut self, text: &str) -> ChatReply {
        let analysis = self.classifier.classify(text).await;
        let context = self.memory.context(self.context_window);
        let timestamp = Utc::now();

        match self.generator.generate(text, &context, &analysis).await {
            Ok(response) => {
                if let Err(e) = self
                    .memory
                    .append(text, &response, timestamp, analysis.clone())
                {
                    warn!(session = %self.id, error = %e, "failed to persist interaction");
                }
                ChatReply {
                    text: response,
                    analysis,
                    recorded: true,
                }
            }
            Err(e) => {
                warn!(session = %self.id, error = %e, "response generation failed");
                ChatReply {
                    text: format!("عذراً، حدث خطأ أثناء معالجة طلبك: {e}"),
                    analysis,
                    recorded: false,
                }
            }
        }
    }

    /// Memory digest for display.
    pub fn summary(&self) -> String {
        self.memory.summary()
    }

    /// Frequency patterns across the stored history.
    pub fn patterns(&self) -> PatternSummary {
        aggregate_patterns(&self.memory.snapshot())
    }

    /// Inferred user preferences.
    pub fn preferences(&self) -> Preferences {
        self.memory.preferences()
    }

    pub fn interaction_count(&self) -> usize {
        self.memory.len()
    }

    /// Drop the conversation history, in memory and on disk.
    pub fn clear(&mut self) -> Result<()> {
        self.memory.clear()
    }

    /// Verify the provider is configured and answering.
    pub async fn check(&self) -> Result<()> {
        self.provider.health_check().await?;
        self.generator.probe().await
    }
}

/// Resolve the system instruction: file > inline config > built-in persona.
fn resolve_system_instruction(config: &MusaConfig) -> Result<String> {
    if let Some(ref path) = config.assistant.system_prompt_file {
        return std::fs::read_to_string(path).map_err(|e| {
            MusaError::Config(format!(
                "failed to read system prompt file {}: {e}",
                path.display()
            ))
        });
    }
    if let Some(ref prompt) = config.assistant.system_prompt {
        return Ok(prompt.clone());
    }
    Ok(DEFAULT_SYSTEM_INSTRUCTION.into())
}
