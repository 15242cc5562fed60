//! # musa-classifier
//!
//! Message classification for the assistant: a JSON-constrained remote call
//! as the primary path, a deterministic rule-based classifier as the
//! fallback, and pure aggregation over past interactions. Classification
//! never fails — any remote or parse error falls back to the rules.

pub mod classifier;
pub mod patterns;
pub mod rules;

pub use classifier::MessageClassifier;
pub use patterns::{PatternSummary, aggregate_patterns};
