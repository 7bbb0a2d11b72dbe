//! Runtime configuration.
//!
//! Everything lives under the data root, `$LIFEOS_HOME` if set, otherwise
//! `~/.lifeos/`:
//! ```text
//! ~/.lifeos/
//!   config.json     # Config (optional, every field defaulted)
//!   items.json      # JsonFileStore contents
//! ```

use crate::ai::{ClaudeCli, TextGenerator, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Default port for the HTTP service
pub const DEFAULT_PORT: u16 = 3434;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid config file {path}: {source}")]
    Invalid {
        path: String,
        source: serde_json::Error,
    },
    #[error("Could not determine home directory")]
    Home,
}

/// Return the data root.
///
/// Uses `$LIFEOS_HOME` if set, otherwise `~/.lifeos/`.
pub fn data_root() -> Result<PathBuf, ConfigError> {
    if let Ok(home) = std::env::var("LIFEOS_HOME") {
        return Ok(PathBuf::from(home));
    }
    let home = dirs::home_dir().ok_or(ConfigError::Home)?;
    Ok(home.join(".lifeos"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Try the text generator before the keyword rules.
    pub use_ai: bool,
    pub model: String,
    /// Replaces the `claude` CLI; receives the prompt on stdin.
    pub command: Option<String>,
    /// Maximum generator calls in flight during batch categorization.
    pub max_concurrent: usize,
    /// A generator call running longer than this is killed and the keyword
    /// rules answer instead.
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            use_ai: false,
            model: "haiku".to_owned(),
            command: None,
            max_concurrent: 2,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClassifierConfig {
    /// The generator to try first, or `None` when AI classification is off.
    pub fn generator(&self) -> Option<Arc<dyn TextGenerator>> {
        if !self.use_ai {
            return None;
        }
        Some(Arc::new(
            ClaudeCli::new(self.model.clone(), self.command.clone()).with_timeout(self.timeout()),
        ))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Bearer token required on every route but `/health`. `None` disables auth.
    pub auth_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: DEFAULT_PORT,
            auth_token: None,
        }
    }
}

impl Config {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `config.json` from the data root.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&data_root()?.join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.classifier.use_ai);
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"classifier": {"useAi": true, "model": "sonnet"}, "server": {"authToken": "s3cret"}}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.classifier.use_ai);
        assert_eq!(config.classifier.model, "sonnet");
        assert_eq!(config.classifier.max_concurrent, 2);
        assert_eq!(config.classifier.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.server.auth_token.as_deref(), Some("s3cret"));
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_timeout_secs_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"classifier": {"useAi": true, "timeoutSecs": 5}}"#).unwrap();

        let classifier = Config::load(&path).unwrap().classifier;
        assert_eq!(classifier.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_generator_only_when_ai_enabled() {
        let mut config = ClassifierConfig::default();
        assert!(config.generator().is_none());
        config.use_ai = true;
        assert!(config.generator().is_some());
    }
}
