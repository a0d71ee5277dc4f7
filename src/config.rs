use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".routablerc.json";

/// Directory scanned when no `paths` are configured.
pub const DEFAULT_SOURCE_DIR: &str = "src";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Root-relative directories to scan, in order.
    #[serde(default = "default_paths")]
    pub paths: Vec<String>,
}

fn default_paths() -> Vec<String> {
    vec![DEFAULT_SOURCE_DIR.to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: default_paths(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every entry in `paths` must be a non-empty, relative directory name.
    pub fn validate(&self) -> Result<()> {
        if self.paths.is_empty() {
            bail!("'paths' must list at least one directory");
        }
        for path in &self.paths {
            if path.trim().is_empty() {
                bail!("Empty directory in 'paths'");
            }
            if Path::new(path).is_absolute() || path.starts_with('/') {
                bail!(
                    "Directory in 'paths' must be relative to the project root: \"{}\"",
                    path
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
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
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
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
