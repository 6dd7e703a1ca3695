use crate::api::{CmdMessage, RecipeApi};
use crate::config::RecipeConfig;
use crate::error::{RecipeError, Result};
use crate::pagination::Pager;
use crate::store::fs::FileBackend;
use crate::store::RecipeStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "RECIPEBOX_HOME";

pub struct RecipeContext {
    pub api: RecipeApi<FileBackend>,
    pub config: RecipeConfig,
    pub data_dir: PathBuf,
    /// Problems recovered from while starting up, for the UI to show.
    pub messages: Vec<CmdMessage>,
}

/// `$RECIPEBOX_HOME` when set and non-empty, else the platform data directory.
pub fn resolve_data_dir(home_override: Option<&str>) -> Result<PathBuf> {
    if let Some(home) = home_override.filter(|h| !h.trim().is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "recipebox", "recipebox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Config("Could not determine data directory".to_string()))
}

/// Builds the API over `data_dir`, loading configuration and the stored catalog.
///
/// Unreadable configuration falls back to defaults and an undecodable catalog
/// falls back to an empty one; both are logged and reported in `messages`.
pub fn initialize(data_dir: &Path) -> Result<RecipeContext> {
    let mut messages = Vec::new();

    let config = match RecipeConfig::load(data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(target: "recipebox::init", error = %e, "Using default configuration");
            messages.push(CmdMessage::warning(format!(
                "Ignoring configuration: {}",
                e
            )));
            RecipeConfig::default()
        }
    };

    let mut store = RecipeStore::new(FileBackend::new(data_dir));
    match store.load() {
        Ok(_) => {}
        Err(e @ RecipeError::Decode { .. }) => {
            warn!(target: "recipebox::init", error = %e, "Starting with an empty catalog");
            messages.push(CmdMessage::warning(format!(
                "Stored recipes could not be read and were ignored: {}",
                e
            )));
        }
        Err(e) => return Err(e),
    }

    let api = RecipeApi::new(store, Pager::new(config.page_size), data_dir.to_path_buf());

    Ok(RecipeContext {
        api,
        config,
        data_dir: data_dir.to_path_buf(),
        messages,
    })
}
