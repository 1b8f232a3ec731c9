use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".joisrc.json";

/// Tag name of the icon component when none is configured.
pub const DEFAULT_COMPONENT_NAME: &str = "Icon";

/// Attribute that carries the sprite identifier when none is configured.
pub const DEFAULT_ID_ATTRIBUTE: &str = "id";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_sprite_path")]
    pub sprite_path: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_component_name")]
    pub component_name: String,
    #[serde(default = "default_id_attribute")]
    pub id_attribute: String,
}

fn default_sprite_path() -> String {
    "public/sprite.svg".to_string()
}

fn default_component_name() -> String {
    DEFAULT_COMPONENT_NAME.to_string()
}

fn default_id_attribute() -> String {
    DEFAULT_ID_ATTRIBUTE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sprite_path: default_sprite_path(),
            includes: Vec::new(),
            ignores: Vec::new(),
            component_name: default_component_name(),
            id_attribute: default_id_attribute(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or if the icon
    /// component or attribute name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.component_name.trim().is_empty() {
            bail!("'componentName' must not be empty");
        }
        if self.id_attribute.trim().is_empty() {
            bail!("'idAttribute' must not be empty");
        }

        Ok(())
    }
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
    /// Path of the config file, `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                source: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
