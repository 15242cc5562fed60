//! # musa-config
//!
//! Configuration system for the Musa assistant (`musa.toml`).

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{
    AssistantConfig, ConfigWarning, LoggingConfig, MemoryConfig, MusaConfig, ServicesConfig,
    WarningSeverity,
};
