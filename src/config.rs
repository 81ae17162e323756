//! Configuration management for the placement readiness analyzer

use crate::error::{PlacementError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub classifier_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub max_listed_keywords: usize,
    pub max_listed_skills: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".placement-readiness")
            .join("models");

        Self {
            models: ModelConfig {
                models_dir,
                classifier_file: "placement_model.json".to_string(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                max_listed_keywords: 10,
                max_listed_skills: 6,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                PlacementError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            PlacementError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-readiness")
            .join("config.toml")
    }

    pub fn models_dir(&self) -> &PathBuf {
        &self.models.models_dir
    }

    pub fn ensure_models_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.models.models_dir)?;
        Ok(())
    }

    /// Where `model install` puts the classifier artifact.
    pub fn installed_classifier_path(&self) -> PathBuf {
        self.models.models_dir.join(&self.models.classifier_file)
    }

    /// Artifact file to load: an explicit override, then the installed
    /// artifact. `None` means the bundled artifact.
    pub fn classifier_path(&self, override_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = override_path {
            return Some(path.to_path_buf());
        }
        let installed = self.installed_classifier_path();
        installed.exists().then_some(installed)
    }
}
