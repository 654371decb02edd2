use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
}

/// Locations of the taxonomy and informativeness data files.
///
/// These are defaults only; the per-binary CLI flags override them.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_taxonomy_path")]
    pub taxonomy_path: PathBuf,
    #[serde(default = "default_ic_path")]
    pub ic_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            taxonomy_path: default_taxonomy_path(),
            ic_path: default_ic_path(),
            log_level: default_log_level(),
        }
    }
}

fn default_taxonomy_path() -> PathBuf {
    PathBuf::from("taxonomy.tsv")
}

fn default_ic_path() -> PathBuf {
    PathBuf::from("ic.tsv")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration.
    ///
    /// Looks for a config file in this order:
    /// 1. Path specified in the WORDSIM_CONFIG environment variable
    /// 2. ./wordsim.toml in the current directory
    ///
    /// A missing file is not an error: all settings have defaults, and the
    /// binaries accept explicit paths on the command line.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("WORDSIM_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("wordsim.toml"));

        if !config_path.exists() {
            return Ok(Config {
                data: DataConfig::default(),
            });
        }

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config =
            toml::from_str(&config_str).context("Failed to parse wordsim.toml")?;
        Ok(config)
    }
}
