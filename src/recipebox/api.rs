//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for recipe operations, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns the page cursor**, so listings and deletes agree on the current page
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no formatting.
//!
//! ## Generic Over StorageBackend
//!
//! `RecipeApi<B: StorageBackend>`:
//! - Production: `RecipeApi<FileBackend>`
//! - Testing: `RecipeApi<MemoryBackend>`

use crate::commands;
use crate::error::{RecipeError, Result};
use crate::model::{NewRecipe, Recipe, RecipeFields, RecipeId};
use crate::pagination::Pager;
use crate::store::{RecipeStore, StorageBackend};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct RecipeApi<B: StorageBackend> {
    store: RecipeStore<B>,
    pager: Pager,
    config_dir: PathBuf,
}

impl<B: StorageBackend> RecipeApi<B> {
    pub fn new(store: RecipeStore<B>, pager: Pager, config_dir: PathBuf) -> Self {
        Self {
            store,
            pager,
            config_dir,
        }
    }

    pub fn add_recipe(&mut self, new: NewRecipe) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, new)
    }

    /// Deletes and pulls the page cursor back if its page disappeared.
    pub fn delete_recipe(&mut self, id: RecipeId) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        if self.pager.clamp(self.store.len()) {
            debug!(target: "recipebox::api", page = self.pager.current(), "Page cursor clamped");
        }
        Ok(result)
    }

    pub fn update_recipe(
        &mut self,
        id: RecipeId,
        fields: &RecipeFields,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, fields)
    }

    pub fn get_recipe(&self, id: RecipeId) -> Option<Recipe> {
        commands::get::find_by_id(&self.store, id)
    }

    pub fn view_recipe(&self, id: RecipeId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    /// The current page.
    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.pager)
    }

    /// Moves the cursor to `page` (1-based) and lists it.
    pub fn select_page(&mut self, page: usize) -> Result<commands::CmdResult> {
        if page == 0 {
            return Err(RecipeError::Api("Pages start at 1".to_string()));
        }
        self.pager.select(page);
        self.list()
    }

    pub fn export(&self) -> Result<commands::CmdResult> {
        commands::export::run(&self.store)
    }

    pub fn import(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn store(&self) -> &RecipeStore<B> {
        &self.store
    }

    pub fn into_store(self) -> RecipeStore<B> {
        self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
