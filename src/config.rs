use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::charset::DEFAULT_TARGET_CHARS;

pub const CONFIG_FILE_NAME: &str = ".trstringsrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_target_chars")]
    pub target_chars: String,
}

fn default_source_root() -> String {
    "./src/js".to_string()
}

fn default_excluded_dirs() -> Vec<String> {
    ["locales", "config", "services", "db"]
        .map(String::from)
        .to_vec()
}

fn default_extension() -> String {
    ".js".to_string()
}

fn default_output() -> String {
    "missing_i18n.json".to_string()
}

fn default_target_chars() -> String {
    DEFAULT_TARGET_CHARS.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            excluded_dirs: default_excluded_dirs(),
            extension: default_extension(),
            output: default_output(),
            target_chars: default_target_chars(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Exclusions are bare directory names, never paths.
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            bail!("'extension' must not be empty");
        }

        if self.target_chars.is_empty() {
            bail!("'targetChars' must not be empty");
        }

        for dir in &self.excluded_dirs {
            if dir.is_empty() || dir.contains(['/', '\\']) {
                bail!(
                    "Invalid entry in 'excludedDirs': \"{}\" (expected a directory name)",
                    dir
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
