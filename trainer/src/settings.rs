use std::path::Path;

use agent::AgentConfig;
use anyhow::{Context, Result};
use game_core::Config;
use serde::{Deserialize, Serialize};

/// Everything a training run reads from its JSON file. Missing sections and
/// fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena: Config,
    pub agent: AgentConfig,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.arena.validate().context("invalid arena config")?;
        self.agent.validate().context("invalid agent config")?;
        Ok(())
    }
}
