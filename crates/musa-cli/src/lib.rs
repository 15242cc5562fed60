//! # musa-cli
//!
//! Command-line interface for the Musa assistant.
//!
//! ## Commands
//!
//! - `musa chat` — Interactive chat in the terminal
//! - `musa summary` — Conversation digest, patterns, and preferences
//! - `musa clear` — Wipe the stored conversation history
//! - `musa check` — Verify config, credentials, and API reachability
//! - `musa config` — Show current configuration

pub mod commands;

pub use commands::Cli;
