use async_trait::async_trait;
use musa_core::Result;
use reqwest::Client;
use tracing::{debug, info};

use crate::provider::*;

/// Google Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    fn build_request_body(&self, request: &LlmRequest) -> serde_json::Value {
        let mut generation_config = serde_json::json!({
            "temperature": request.temperature,
            "maxOutputTokens": request.max_tokens,
        });
        if request.json_output {
            generation_config["responseMimeType"] = serde_json::json!("application/json");
        }

        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }],
            }],
            "generationConfig": generation_config,
        });

        if let Some(ref system) = request.system {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": system }],
            });
        }

        body
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn models(&self) -> Vec<String> {
        vec![
            "gemini-2.5-pro".into(),
            "gemini-2.5-flash".into(),
            "gemini-2.0-flash".into(),
        ]
    }

    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse> {
        let body = self.build_request_body(request);
        debug!(model = %request.model, "sending Gemini API request");

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, request.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| musa_core::MusaError::LlmProvider(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            if status.as_u16() == 429 {
                return Err(musa_core::MusaError::RateLimited {
                    retry_after_secs: 30,
                });
            }
            return Err(musa_core::MusaError::LlmProvider(format!(
                "HTTP {status}: {text}"
            )));
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| musa_core::MusaError::LlmProvider(e.to_string()))?;

        // Concatenate the text parts of the first candidate. An empty or
        // filtered candidate list yields an empty string, not an error —
        // the caller decides how to render that.
        let text = data["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let usage_data = &data["usageMetadata"];
        let usage = Usage {
            input_tokens: usage_data["promptTokenCount"].as_u64().unwrap_or(0) as u32,
            output_tokens: usage_data["candidatesTokenCount"].as_u64().unwrap_or(0) as u32,
        };

        Ok(LlmResponse { text, usage })
    }

    async fn health_check(&self) -> Result<()> {
        info!("checking Gemini API health");
        if self.api_key.is_empty() {
            return Err(musa_core::MusaError::LlmProvider(
                "GEMINI_API_KEY not set".into(),
            ));
        }
        Ok(())
    }
}
