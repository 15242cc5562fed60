use std::sync::Arc;

use tracing::debug;

use musa_core::{Classification, MusaError, Result};
use musa_llm::{LlmProvider, LlmRequest};

/// Built-in persona and store facts for the assistant, used when the config
/// doesn't override the system instruction.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "\
أنت مساعد ذكي لمتجر '3QRab' واسمك موسي. \
تتحدث بشخصية ودودة ومتحمسة للتكنولوجيا. \n\
عن موسي (المساعد الذكي):\n\
• شخصيته: ودود، صبور، يحب مساعدة العملاء بوضوح وسهولة\n\
• شغفه: متخصص في خدمة العملاء ومساعدتهم في كل احتياجاتهم\n\
• مهارته: خبير في منتجات المتجر وسياسات الخدمة\n\
• رؤيته: تقديم تجربة تسوق سهلة وممتعة لكل عميل\n\
• أسلوبه: يستمع جيداً، يرد بسرعة، يقدم حلول عملية\n\
معلومات المتجر:\n\
• المنتجات: ساعة كربون أسود بـ 400 جنيه مصري\n\
• الدفع: نقداً عند الاستلام\n\
• الشحن: مجاني للطلبات +500 جنيه، التوصيل 3-4 أيام\n\
• الإرجاع: 7 أيام للاستبدال، 3 أيام لاسترداد المبلغ\n\
• التواصل: 010-26897739 أو ehab.hussein.dev@gmail.com\n\
كيف ترد (بشخصية موسي):\n\
1. اسأل عن اسم العميل بودية: 'أهلاً بك! أنا موسي مساعد المتجر، ممكن أعرف اسمك؟'\n\
2. استخدم اسم العميل واجعله يشعر بالترحيب الشخصي\n\
3. أضف لمسة شخصية: 'يسعدني أن أساعدك!' أو 'كوني جزء من عائلة 3QRab!'\n\
4. اربط بشغف التكنولوجيا عند المناسب: 'أحب تجربة تقنيات AI جديدة لخدمتك!'\n\
5. لتتبع الطلبات: 'أهلاً [الاسم]! يمكنك تتبع طلبك: https://3qrab.netlify.app/track-order?phone=01026897739'\n\
6. كن صبوراً ومتفهماً واستمع لاحتياجات العميل\n\
7. قدم تجربة شخصية فريدة لكل عميل\n\
تحدث بروح موسي المتحمسة والودودة دائماً! ⌚";

/// Shown when the API answers with an empty body.
const EMPTY_RESPONSE_FALLBACK: &str = "عذراً، لم أتمكن من توليد رد. حاول مرة أخرى من فضلك.";

/// Generates assistant responses from the current message, the conversation
/// context, and the message classification.
pub struct ResponseGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
    system_instruction: String,
    max_tokens: u32,
    temperature: f32,
}

impl ResponseGenerator {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            system_instruction: system_instruction.into(),
            max_tokens,
            temperature,
        }
    }

    /// Generate a response to `user_input`. `Err` means the remote call
    /// failed; the caller decides how to render that to the user. An empty
    /// model answer comes back as `Ok` with a canned apology sentence.
    pub async fn generate(
        &self,
        user_input: &str,
        context: &str,
        analysis: &Classification,
    ) -> Result<String> {
        let request = LlmRequest {
            model: self.model.clone(),
            prompt: Self::build_prompt(user_input, context, analysis),
            system: Some(self.system_instruction.clone()),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            json_output: false,
        };

        let response = self.provider.complete(&request).await?;
        debug!(tokens = response.usage.total_tokens(), "generated response");

        let text = response.text.trim();
        if text.is_empty() {
            return Ok(EMPTY_RESPONSE_FALLBACK.into());
        }
        Ok(text.to_string())
    }

    /// Fire a one-line probe request to confirm the API is answering.
    pub async fn probe(&self) -> Result<()> {
        let request = LlmRequest {
            model: self.model.clone(),
            prompt: "Hello, this is a test message.".into(),
            system: None,
            max_tokens: 32,
            temperature: 0.0,
            json_output: false,
        };
        let response = self.provider.complete(&request).await?;
        if response.text.trim().is_empty() {
            return Err(MusaError::LlmProvider("probe returned empty response".into()));
        }
        Ok(())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_prompt(user_input: &str, context: &str, analysis: &Classification) -> String {
        let mut parts = Vec::new();
        if !context.is_empty() {
            parts.push(format!("Previous conversation context:\n{context}\n"));
        }
        parts.push(format!(
            "Question analysis:\n{}\n",
            Self::format_analysis(analysis)
        ));
        parts.push(format!("Current user message: {user_input}"));
        parts.join("\n")
    }

    /// Field-by-field rendering of the classification for the prompt.
    fn format_analysis(analysis: &Classification) -> String {
        format!(
            "- Intent: {}\n- Sentiment: {}\n- Topic: {}\n- Complexity: {}\n- Keywords: {}",
            analysis.intent,
            analysis.sentiment,
            analysis.topic,
            analysis.complexity,
            analysis.keywords.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use musa_core::{Complexity, Intent, Sentiment};

    fn sample_analysis() -> Classification {
        Classification {
            intent: Intent::Information,
            sentiment: Sentiment::Curious,
            topic: "product".into(),
            complexity: Complexity::Simple,
            keywords: vec!["ساعة".into(), "سعر".into()],
        }
    }

    #[test]
    fn test_build_prompt_with_context() {
        let prompt = ResponseGenerator::build_prompt(
            "كم السعر؟",
            "User: مرحباً\nAssistant: أهلاً بك\n---",
            &sample_analysis(),
        );
        assert!(prompt.starts_with("Previous conversation context:"));
        assert!(prompt.contains("Question analysis:"));
        assert!(prompt.ends_with("Current user message: كم السعر؟"));
    }

    #[test]
    fn test_build_prompt_without_context() {
        let prompt = ResponseGenerator::build_prompt("كم السعر؟", "", &sample_analysis());
        assert!(!prompt.contains("Previous conversation context:"));
        assert!(prompt.starts_with("Question analysis:"));
    }

    #[test]
    fn test_format_analysis_lists_every_field() {
        let text = ResponseGenerator::format_analysis(&sample_analysis());
        assert!(text.contains("- Intent: information"));
        assert!(text.contains("- Sentiment: curious"));
        assert!(text.contains("- Topic: product"));
        assert!(text.contains("- Complexity: simple"));
        assert!(text.contains("- Keywords: ساعة, سعر"));
    }
}
