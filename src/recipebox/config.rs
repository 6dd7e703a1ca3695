use crate::error::{RecipeError, Result};
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for recipebox, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    /// Recipes shown per page in listings
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RecipeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RecipeError::Io)?;
        let config: RecipeConfig =
            serde_json::from_str(&content).map_err(RecipeError::Serialization)?;
        if config.page_size == 0 {
            return Err(RecipeError::Config("page-size must be at least 1".into()));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RecipeError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RecipeError::Serialization)?;
        fs::write(config_path, content).map_err(RecipeError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => {
                let size: usize = value.trim().parse().map_err(|_| {
                    RecipeError::Config(format!("page-size must be a number, got '{}'", value))
                })?;
                if size == 0 {
                    return Err(RecipeError::Config("page-size must be at least 1".into()));
                }
                self.page_size = size;
                Ok(())
            }
            other => Err(RecipeError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![("page-size", self.page_size.to_string())]
    }
}
