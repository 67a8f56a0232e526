//! Session configuration and config file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the current directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "quizline.toml";

/// Toggles for one interactive session. Every flag defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Ask questions in a random order each round.
    #[serde(default = "default_true")]
    pub shuffle_questions: bool,
    /// Show answers in a random order for each question.
    #[serde(default = "default_true")]
    pub shuffle_answers: bool,
    /// Tell the user after each question whether they were right.
    #[serde(default = "default_true")]
    pub feedback: bool,
    /// Repeat missed questions until every one is answered correctly.
    #[serde(default = "default_true")]
    pub requiz: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            shuffle_questions: true,
            shuffle_answers: true,
            feedback: true,
            requiz: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Top-level quizline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizlineConfig {
    /// Session toggles.
    #[serde(default)]
    pub session: SessionConfig,
    /// Fixed shuffle seed. `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Load config from an explicit path, or from `quizline.toml` if present.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizlineConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}: {:?}", path.display(), config);
            Ok(config)
        }
        None => Ok(QuizlineConfig::default()),
    }
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<QuizlineConfig> {
    Ok(toml::from_str(content)?)
}
