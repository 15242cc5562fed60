use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration — maps to `musa.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MusaConfig {
    pub assistant: AssistantConfig,
    pub memory: MemoryConfig,
    pub logging: LoggingConfig,
    pub services: ServicesConfig,
}

// ── Assistant ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Model used for response generation, e.g. "gemini-2.5-flash".
    pub model: String,
    /// Model used for message classification (the stronger model pays off here).
    pub analysis_model: String,
    /// System instruction injected into every generation call.
    /// When unset, the built-in store persona is used.
    pub system_prompt: Option<String>,
    /// Path to a file containing the system instruction (overrides `system_prompt`).
    pub system_prompt_file: Option<PathBuf>,
    /// Maximum tokens per response.
    pub max_tokens: u32,
    /// Temperature for response generation (0.0 - 2.0).
    pub temperature: f32,
    /// Temperature for classification calls — kept low for consistent output.
    pub analysis_temperature: f32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            analysis_model: "gemini-2.5-pro".into(),
            system_prompt: None,
            system_prompt_file: None,
            max_tokens: 1000,
            temperature: 0.7,
            analysis_temperature: 0.3,
        }
    }
}

// ── Memory ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Path to the conversation memory file.
    pub file_path: PathBuf,
    /// Maximum number of interactions to retain.
    pub capacity: usize,
    /// Number of recent interactions included as context in each prompt.
    pub context_window: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("conversation_memory.json"),
            capacity: 20,
            context_window: 5,
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

// ── Services ───────────────────────────────────────────────────

/// External service API keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Gemini API key — used for both generation and classification.
    /// Can also be set via GEMINI_API_KEY environment variable.
    /// Config file takes priority over environment variable.
    pub gemini_api_key: Option<String>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
        }
    }
}

// ── Default for root ───────────────────────────────────────────

impl Default for MusaConfig {
    fn default() -> Self {
        Self {
            assistant: AssistantConfig::default(),
            memory: MemoryConfig::default(),
            logging: LoggingConfig::default(),
            services: ServicesConfig::default(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
            WarningSeverity::Info => "💡",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

impl MusaConfig {
    /// The Gemini API key, from config file or environment. Absence is fatal
    /// for any command that talks to the API.
    pub fn require_gemini_key(&self) -> musa_core::Result<String> {
        self.services
            .gemini_api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                musa_core::MusaError::Config(
                    "GEMINI_API_KEY environment variable is required \
                     (or set services.gemini_api_key in musa.toml)"
                        .into(),
                )
            })
    }

    /// Validate the config and return a list of warnings/errors.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Models ───
        if self.assistant.model.is_empty() {
            warnings.push(ConfigWarning {
                field: "assistant.model".into(),
                message: "model is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'gemini-2.5-flash'".into()),
            });
        }
        if self.assistant.analysis_model.is_empty() {
            warnings.push(ConfigWarning {
                field: "assistant.analysis_model".into(),
                message: "analysis model is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 'gemini-2.5-pro'".into()),
            });
        }

        // ── Temperatures ───
        for (field, value) in [
            ("assistant.temperature", self.assistant.temperature),
            (
                "assistant.analysis_temperature",
                self.assistant.analysis_temperature,
            ),
        ] {
            if !(0.0..=2.0).contains(&value) {
                warnings.push(ConfigWarning {
                    field: field.into(),
                    message: format!("temperature {} is out of range", value),
                    severity: WarningSeverity::Error,
                    hint: Some("Temperature must be between 0.0 and 2.0".into()),
                });
            }
        }

        // ── Max tokens ───
        if self.assistant.max_tokens == 0 {
            warnings.push(ConfigWarning {
                field: "assistant.max_tokens".into(),
                message: "max_tokens is 0 — the assistant won't produce output".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 1000".into()),
            });
        }

        // ── Memory ───
        if self.memory.capacity == 0 {
            warnings.push(ConfigWarning {
                field: "memory.capacity".into(),
                message: "capacity is 0 — no conversation history would be kept".into(),
                severity: WarningSeverity::Error,
                hint: Some("Set to e.g. 20".into()),
            });
        }
        if self.memory.context_window == 0 {
            warnings.push(ConfigWarning {
                field: "memory.context_window".into(),
                message: "context window is 0 — replies won't see earlier exchanges".into(),
                severity: WarningSeverity::Warning,
                hint: Some("Set to e.g. 5".into()),
            });
        } else if self.memory.context_window > self.memory.capacity {
            warnings.push(ConfigWarning {
                field: "memory.context_window".into(),
                message: format!(
                    "context window {} exceeds capacity {}",
                    self.memory.context_window, self.memory.capacity
                ),
                severity: WarningSeverity::Info,
                hint: Some("Only `capacity` interactions are ever retained".into()),
            });
        }

        // ── Logging level ───
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_levels.join(", "))),
            });
        }

        // ── Logging format ───
        let valid_formats = ["pretty", "json", "compact"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", valid_formats.join(", "))),
            });
        }

        // Check for hard errors
        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
