//! # Command Layer
//!
//! One module per operation. Each exposes a `run` function taking the store (and
//! whatever else it needs) and returning a [`CmdResult`]. Commands never print; the
//! messages they collect are rendered by the UI.
//!
//! Operations on an id that is not in the store are no-ops that report an info
//! message, never errors.

use crate::config::RecipeConfig;
use crate::model::Recipe;
use crate::pagination::PageInfo;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Recipes created, changed or removed by the command.
    pub affected_recipes: Vec<Recipe>,
    /// Recipes the UI should display.
    pub listed_recipes: Vec<Recipe>,
    /// Set by paginated listings.
    pub page: Option<PageInfo>,
    /// Set by `export`: the raw persisted value.
    pub exported: Option<String>,
    pub config: Option<RecipeConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: RecipeConfig) -> Self {
        self.config = Some(config);
        self
    }
}
