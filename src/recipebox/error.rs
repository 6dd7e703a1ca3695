use crate::model::RecipeId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stored value under '{key}' could not be decoded: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not read image {}: {reason}", path.display())]
    Image { path: PathBuf, reason: String },

    #[error("No recipe id left after {0}")]
    IdsExhausted(RecipeId),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
