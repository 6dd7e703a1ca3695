use crate::commands::{CmdMessage, CmdResult};
use crate::config::RecipeConfig;
use crate::error::{RecipeError, Result};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes `config.json` in `config_dir`.
///
/// Unknown keys and invalid values are errors; a rejected `Set` leaves the file
/// as it was.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RecipeConfig::load(config_dir)?;

    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = lookup(&config, &key)?;
            result.add_message(CmdMessage::info(value));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            debug!(target: "recipebox::config", key = %key, "Configuration saved");
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                lookup(&config, &key)?
            )));
        }
    }
    Ok(result.with_config(config))
}

fn lookup(config: &RecipeConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| RecipeError::Config(format!("Unknown config key: {}", key)))
}
