use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classification::Classification;

/// One user-message / assistant-response exchange. Immutable once created;
/// the memory store only ever appends, bulk-clears, or evicts whole entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub user_input: String,
    pub assistant_response: String,
    pub timestamp: DateTime<Utc>,
    pub analysis: Classification,
}

impl Interaction {
    pub fn new(
        user_input: impl Into<String>,
        assistant_response: impl Into<String>,
        timestamp: DateTime<Utc>,
        analysis: Classification,
    ) -> Self {
        Self {
            user_input: user_input.into(),
            assistant_response: assistant_response.into(),
            timestamp,
            analysis,
        }
    }
}
