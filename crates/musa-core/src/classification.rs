use serde::{Deserialize, Serialize};

/// Maximum number of keywords kept on a classification.
pub const MAX_KEYWORDS: usize = 5;

/// The user's primary intent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Question,
    Request,
    Greeting,
    Complaint,
    Compliment,
    Information,
    Help,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Question => "question",
            Intent::Request => "request",
            Intent::Greeting => "greeting",
            Intent::Complaint => "complaint",
            Intent::Compliment => "compliment",
            Intent::Information => "information",
            Intent::Help => "help",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "question" => Some(Intent::Question),
            "request" => Some(Intent::Request),
            "greeting" => Some(Intent::Greeting),
            "complaint" => Some(Intent::Complaint),
            "compliment" => Some(Intent::Compliment),
            "information" => Some(Intent::Information),
            "help" => Some(Intent::Help),
            _ => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The emotional tone of a message.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
    Curious,
    Frustrated,
    Excited,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Curious => "curious",
            Sentiment::Frustrated => "frustrated",
            Sentiment::Excited => "excited",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            "curious" => Some(Sentiment::Curious),
            "frustrated" => Some(Sentiment::Frustrated),
            "excited" => Some(Sentiment::Excited),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How involved a message is to answer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(Complexity::Simple),
            "moderate" => Some(Complexity::Moderate),
            "complex" => Some(Complexity::Complex),
            _ => None,
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured metadata describing one user message.
///
/// Invariant: every field holds a valid value — construction goes through
/// [`Classification::from_raw`], which coerces anything out of range to its
/// default, so downstream code never sees a missing or unknown label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: Intent,
    pub sentiment: Sentiment,
    pub topic: String,
    pub complexity: Complexity,
    pub keywords: Vec<String>,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            intent: Intent::default(),
            sentiment: Sentiment::default(),
            topic: "general".into(),
            complexity: Complexity::default(),
            keywords: vec![],
        }
    }
}

/// Permissive mirror of a model-produced classification object. Whatever the
/// model returned deserializes into this; [`Classification::from_raw`] does
/// the validating.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawClassification {
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub complexity: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl Classification {
    /// Validate raw field values, coercing anything invalid or absent to its
    /// default. `topic` is lower-cased and defaults to "general"; `keywords`
    /// is truncated to [`MAX_KEYWORDS`] entries.
    pub fn from_raw(raw: RawClassification) -> Self {
        let intent = raw
            .intent
            .map(|s| s.to_lowercase())
            .and_then(|s| Intent::parse(&s))
            .unwrap_or_default();
        let sentiment = raw
            .sentiment
            .map(|s| s.to_lowercase())
            .and_then(|s| Sentiment::parse(&s))
            .unwrap_or_default();
        let complexity = raw
            .complexity
            .map(|s| s.to_lowercase())
            .and_then(|s| Complexity::parse(&s))
            .unwrap_or_default();
        let topic = raw
            .topic
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "general".into());
        let mut keywords = raw.keywords.unwrap_or_default();
        keywords.truncate(MAX_KEYWORDS);

        Self {
            intent,
            sentiment,
            topic,
            complexity,
            keywords,
        }
    }
}
