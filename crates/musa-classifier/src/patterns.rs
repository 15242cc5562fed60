use std::collections::BTreeMap;

use serde::Serialize;

use musa_core::{Complexity, Intent, Interaction, Sentiment};

/// Frequency counts across a sequence of interactions.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatternSummary {
    pub intent_counts: BTreeMap<Intent, usize>,
    pub sentiment_counts: BTreeMap<Sentiment, usize>,
    pub topic_counts: BTreeMap<String, usize>,
    /// Complexity labels in interaction order.
    pub complexity_trend: Vec<Complexity>,
    pub total_interactions: usize,
}

/// Aggregate classification patterns across past interactions. Pure — no I/O.
pub fn aggregate_patterns(interactions: &[Interaction]) -> PatternSummary {
    let mut summary = PatternSummary {
        total_interactions: interactions.len(),
        ..Default::default()
    };
    for interaction in interactions {
        let analysis = &interaction.analysis;
        *summary.intent_counts.entry(analysis.intent).or_insert(0) += 1;
        *summary
            .sentiment_counts
            .entry(analysis.sentiment)
            .or_insert(0) += 1;
        *summary
            .topic_counts
            .entry(analysis.topic.clone())
            .or_insert(0) += 1;
        summary.complexity_trend.push(analysis.complexity);
    }
    summary
}
