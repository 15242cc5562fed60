//! # musa-core
//!
//! Core types for the Musa assistant: message classifications, recorded
//! interactions, and the unified error type.

pub mod classification;
pub mod error;
pub mod interaction;

pub use classification::{
    Classification, Complexity, Intent, MAX_KEYWORDS, RawClassification, Sentiment,
};
pub use error::{MusaError, Result};
pub use interaction::Interaction;
