//! Configuration Management
//!
//! Handles persistent CLI configuration. Credentials never land here; they
//! stay in the environment.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Default workspace ID for workspace-scoped commands
    #[serde(default)]
    pub workspace: Option<String>,
    /// Preferred output format (table, json, yaml)
    #[serde(default)]
    pub output: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("asana").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Get effective workspace (env > config)
    pub fn effective_workspace(&self) -> Option<String> {
        std::env::var("ASANA_DEFAULT_WORKSPACE")
            .ok()
            .or_else(|| self.workspace.clone())
    }

    /// Set default workspace and save
    pub fn set_workspace(&mut self, workspace_id: &str) -> Result<()> {
        self.workspace = Some(workspace_id.to_string());
        self.save()
    }

    /// Set preferred output format and save
    pub fn set_output(&mut self, output: &str) -> Result<()> {
        self.output = Some(output.to_string());
        self.save()
    }
}
