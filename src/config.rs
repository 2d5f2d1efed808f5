use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lingorc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_locale: Option<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default)]
    pub include_comments: bool,
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    ["vue", "js", "ts"].map(String::from).to_vec()
}

fn default_min_text_length() -> usize {
    2
}

fn default_max_text_length() -> usize {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            source_root: default_source_root(),
            base_locale: None,
            extensions: default_extensions(),
            ignores: Vec::new(),
            ignore_texts: Vec::new(),
            include_comments: false,
            min_text_length: default_min_text_length(),
            max_text_length: default_max_text_length(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// text length bounds are inconsistent.
    pub fn validate(&self) -> Result<()> {
        // Entries without wildcards are treated as literal substrings,
        // so only real glob patterns need to compile.
        for pattern in &self.ignores {
            if pattern.contains(['*', '?', '[']) {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
            }
        }

        if self.min_text_length == 0 {
            bail!("'minTextLength' must be at least 1");
        }
        if self.min_text_length > self.max_text_length {
            bail!(
                "'minTextLength' ({}) must not exceed 'maxTextLength' ({})",
                self.min_text_length,
                self.max_text_length
            );
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
            let content = fs::read_to_string(&path)?;
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
