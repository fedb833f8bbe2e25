use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{env, paths};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Company configuration document
    #[serde(default = "default_config_file")]
    pub config_file: PathBuf,

    /// Firebase services descriptor
    #[serde(default = "default_services_file")]
    pub services_file: PathBuf,

    /// Environment variable naming the output accumulation file
    #[serde(default = "default_output_env")]
    pub output_env: String,
}

fn default_config_file() -> PathBuf {
    PathBuf::from(paths::CONFIG_FILE)
}

fn default_services_file() -> PathBuf {
    PathBuf::from(paths::SERVICES_FILE)
}

fn default_output_env() -> String {
    env::GITHUB_OUTPUT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_file: default_config_file(),
            services_file: default_services_file(),
            output_env: default_output_env(),
        }
    }
}

impl Config {
    /// Load `<config_dir>/buildvals/config.toml`, or defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("buildvals").join("config.toml");
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Accumulation file named by the configured environment variable
    pub fn output_path_from_env(&self) -> Option<PathBuf> {
        std::env::var_os(&self.output_env)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
