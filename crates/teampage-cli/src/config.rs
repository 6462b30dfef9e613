//! Configuration management for the team page CLI
//!
//! Optional settings in ~/.config/teampage/config.toml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use teampage::{GeneratorConfig, DEFAULT_FILE_NAME};

const CONFIG_DIR: &str = "teampage";
const CONFIG_FILE: &str = "config.toml";
const OUTPUT_DIR: &str = "output";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Where pages are written; defaults to `output/` next to the executable
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_name: default_file_name(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            // No config dir on this platform; nothing to read
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or use defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        Ok(config)
    }

    /// Output directory to use for this run
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }

        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join(OUTPUT_DIR)))
            .unwrap_or_else(|| PathBuf::from(OUTPUT_DIR))
    }

    /// Settings handed to the generator
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: self.resolved_output_dir(),
            file_name: self.file_name.clone(),
        }
    }
}
