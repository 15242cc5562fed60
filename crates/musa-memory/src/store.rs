use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use musa_core::{Classification, Complexity, Interaction, MusaError, Result};

/// Bounded rolling conversation memory, persisted as a single JSON file.
///
/// The file is read wholesale when the store is opened and rewritten
/// wholesale after every mutation. Last writer wins — the store assumes one
/// active session per memory file and takes no lock.
pub struct ConversationMemory {
    interactions: VecDeque<Interaction>,
    capacity: usize,
    path: PathBuf,
}

impl ConversationMemory {
    /// Open the memory store at `path`. A missing or unreadable file starts
    /// the store empty — load failures are logged, never propagated. Files
    /// holding more than `capacity` entries are trimmed to the newest ones.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let mut interactions = Self::load(&path);
        while interactions.len() > capacity {
            interactions.pop_front();
        }
        info!(?path, count = interactions.len(), "opened conversation memory");
        Self {
            interactions,
            capacity,
            path,
        }
    }

    fn load(path: &Path) -> VecDeque<Interaction> {
        if !path.exists() {
            return VecDeque::new();
        }
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Vec<Interaction>>(&raw) {
                Ok(list) => list.into(),
                Err(e) => {
                    warn!(?path, error = %e, "failed to parse memory file, starting empty");
                    VecDeque::new()
                }
            },
            Err(e) => {
                warn!(?path, error = %e, "failed to read memory file, starting empty");
                VecDeque::new()
            }
        }
    }

    /// Record one exchange. Evicts the oldest entries once `capacity` is
    /// exceeded, then persists the full sequence. The in-memory append is
    /// never rolled back; a persist failure is returned for the caller to
    /// log (best-effort durability).
    pub fn append(
        &mut self,
        user_input: impl Into<String>,
        assistant_response: impl Into<String>,
        timestamp: DateTime<Utc>,
        analysis: Classification,
    ) -> Result<()> {
        self.interactions.push_back(Interaction::new(
            user_input,
            assistant_response,
            timestamp,
            analysis,
        ));
        while self.interactions.len() > self.capacity {
            self.interactions.pop_front();
        }
        self.persist()
    }

    /// The most recent `window` interactions formatted for prompt inclusion,
    /// oldest of the window first. Empty string when nothing is stored.
    pub fn context(&self, window: usize) -> String {
        if self.interactions.is_empty() || window == 0 {
            return String::new();
        }
        let skip = self.interactions.len().saturating_sub(window);
        let mut parts = Vec::new();
        for interaction in self.interactions.iter().skip(skip) {
            parts.push(format!("User: {}", interaction.user_input));
            parts.push(format!("Assistant: {}", interaction.assistant_response));
            parts.push("---".to_string());
        }
        parts.join("\n")
    }

    /// Human-readable digest: topics seen, intents seen, total count.
    /// Topics and intents are listed in first-seen order.
    pub fn summary(&self) -> String {
        if self.interactions.is_empty() {
            return String::new();
        }
        let mut topics: Vec<&str> = Vec::new();
        let mut intents: Vec<&str> = Vec::new();
        for interaction in &self.interactions {
            let topic = interaction.analysis.topic.as_str();
            if !topics.contains(&topic) {
                topics.push(topic);
            }
            let intent = interaction.analysis.intent.as_str();
            if !intents.contains(&intent) {
                intents.push(intent);
            }
        }
        let mut lines = Vec::new();
        if !topics.is_empty() {
            lines.push(format!("Topics discussed: {}", topics.join(", ")));
        }
        if !intents.is_empty() {
            lines.push(format!("User intents: {}", intents.join(", ")));
        }
        lines.push(format!("Total interactions: {}", self.interactions.len()));
        lines.join("\n")
    }

    /// Preferences inferred from the stored history.
    pub fn preferences(&self) -> Preferences {
        let mut frequent_topics: BTreeMap<String, usize> = BTreeMap::new();
        let mut complexity_counts: BTreeMap<Complexity, usize> = BTreeMap::new();
        for interaction in &self.interactions {
            *frequent_topics
                .entry(interaction.analysis.topic.clone())
                .or_insert(0) += 1;
            *complexity_counts
                .entry(interaction.analysis.complexity)
                .or_insert(0) += 1;
        }
        let complexity_preference = complexity_counts
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|(complexity, _)| complexity);
        Preferences {
            frequent_topics,
            complexity_preference,
        }
    }

    /// Empty the store and persist the empty state.
    pub fn clear(&mut self) -> Result<()> {
        self.interactions.clear();
        self.persist()
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Clone of the stored interactions, oldest first.
    pub fn snapshot(&self) -> Vec<Interaction> {
        self.interactions.iter().cloned().collect()
    }

    fn persist(&self) -> Result<()> {
        let list: Vec<&Interaction> = self.interactions.iter().collect();
        let json = serde_json::to_string_pretty(&list)?;
        std::fs::write(&self.path, json).map_err(|e| {
            MusaError::Memory(format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

/// User preferences inferred from conversation history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Preferences {
    /// Topic → number of times it came up.
    pub frequent_topics: BTreeMap<String, usize>,
    /// Most frequent complexity level; `None` until any history exists.
    pub complexity_preference: Option<Complexity>,
}
