use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

use crate::schema::MusaConfig;

/// Loads the Musa configuration and hands out snapshots of it.
pub struct ConfigLoader {
    config: Arc<RwLock<MusaConfig>>,
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > MUSA_CONFIG env > ~/.musa/musa.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("MUSA_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".musa")
            .join("musa.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> musa_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = if config_path.exists() {
            info!(?config_path, "loading configuration");
            let raw = std::fs::read_to_string(&config_path)?;
            toml::from_str::<MusaConfig>(&raw).map_err(|e| {
                musa_core::MusaError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            warn!(?config_path, "config file not found, using defaults");
            MusaConfig::default()
        };

        // Apply environment variable overrides
        let config = Self::apply_env_overrides(config);

        // Validate config — log warnings, fail on errors
        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
            }
            Err(e) => {
                return Err(musa_core::MusaError::Config(e));
            }
        }

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Get a read snapshot of the current config.
    pub fn get(&self) -> MusaConfig {
        self.config.read().clone()
    }

    /// Get a shared reference for subscription.
    pub fn shared(&self) -> Arc<RwLock<MusaConfig>> {
        Arc::clone(&self.config)
    }

    /// Path the config was loaded from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Apply env var overrides (MUSA_MODEL, MUSA_LOG_LEVEL, etc.)
    fn apply_env_overrides(mut config: MusaConfig) -> MusaConfig {
        if let Ok(v) = std::env::var("MUSA_MODEL") {
            config.assistant.model = v;
        }
        if let Ok(v) = std::env::var("MUSA_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Ok(v) = std::env::var("MUSA_MEMORY_FILE") {
            config.memory.file_path = PathBuf::from(v);
        }
        // API key: env var fills in when the config file doesn't have it set.
        // This means config file takes priority, env is the fallback.
        if config.services.gemini_api_key.is_none() {
            if let Ok(v) = std::env::var("GEMINI_API_KEY") {
                config.services.gemini_api_key = Some(v);
            }
        }
        config
    }

    /// Reload the config from disk.
    pub fn reload(&self) -> musa_core::Result<()> {
        if !self.config_path.exists() {
            return Err(musa_core::MusaError::Config(format!(
                "config file not found: {}",
                self.config_path.display()
            )));
        }
        let raw = std::fs::read_to_string(&self.config_path)?;
        let new_config = toml::from_str::<MusaConfig>(&raw).map_err(|e| {
            musa_core::MusaError::Config(format!(
                "failed to parse {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        let new_config = Self::apply_env_overrides(new_config);
        *self.config.write() = new_config;
        info!("configuration reloaded");
        Ok(())
    }
}
