//! # Storage Layer
//!
//! Recipes live in a single ordered sequence held by [`RecipeStore`]. The sequence is
//! mirrored to a key-value [`StorageBackend`] under one fixed key, [`RECIPES_KEY`],
//! and every save overwrites the whole collection.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: Production storage
//!   - One file per key: `<root>/<key>.json`
//!   - The recipe sequence therefore lands in `recipes.json`
//!
//! - [`memory::MemoryBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── recipes.json   # JSON array: [{"id", "title", "ingredients", "instructions", "image"}, ...]
//! └── config.json    # Configuration
//! ```
//!
//! The array layout is field-for-field the one a browser `localStorage` dump of the
//! catalog holds, so exported values can be moved between the two.
//!
//! ## Consistency
//!
//! Mutations go through [`RecipeStore::transact`]: the change is applied to a working
//! copy, the copy is persisted, and only then does it replace the in-memory sequence.
//! A failed write leaves the store exactly as it was.

use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeId};
use chrono::Utc;
use tracing::debug;

pub mod fs;
pub mod memory;

/// Key under which the whole recipe sequence is persisted.
pub const RECIPES_KEY: &str = "recipes";

/// Abstract key-value storage, the moral equivalent of browser `localStorage`.
pub trait StorageBackend {
    /// Read the value under `key`, `None` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// The in-memory recipe sequence plus the backend it is mirrored to.
pub struct RecipeStore<B: StorageBackend> {
    backend: B,
    recipes: Vec<Recipe>,
}

impl<B: StorageBackend> RecipeStore<B> {
    /// Creates an empty store. Call [`load`](Self::load) to populate it.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            recipes: Vec::new(),
        }
    }

    /// Replaces the in-memory sequence with the persisted one.
    ///
    /// An absent key leaves the store empty. A value that cannot be decoded also
    /// leaves the store empty, and is reported as [`RecipeError::Decode`] so the
    /// caller can decide whether to fall back or surface it.
    pub fn load(&mut self) -> Result<usize> {
        let raw = match self.backend.get_item(RECIPES_KEY)? {
            Some(raw) => raw,
            None => {
                self.recipes.clear();
                return Ok(0);
            }
        };

        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => {
                debug!(target: "recipebox::store", count = recipes.len(), "Loaded recipes");
                self.recipes = recipes;
                Ok(self.recipes.len())
            }
            Err(source) => {
                self.recipes.clear();
                Err(RecipeError::Decode {
                    key: RECIPES_KEY.to_string(),
                    source,
                })
            }
        }
    }

    /// Writes the whole sequence, overwriting the prior value.
    pub fn save(&mut self) -> Result<()> {
        let encoded = serde_json::to_string(&self.recipes)?;
        self.backend.set_item(RECIPES_KEY, &encoded)
    }

    /// Applies `f` to a copy of the sequence, persists the copy, then commits it.
    pub fn transact<T>(&mut self, f: impl FnOnce(&mut Vec<Recipe>) -> T) -> Result<T> {
        let mut working = self.recipes.clone();
        let out = f(&mut working);
        let encoded = serde_json::to_string(&working)?;
        self.backend.set_item(RECIPES_KEY, &encoded)?;
        self.recipes = working;
        Ok(out)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn find(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.find(id).is_some()
    }

    /// Next free id: the current time in milliseconds, or one past the largest id
    /// already in the store when the clock has not moved on.
    ///
    /// Fails with [`RecipeError::IdsExhausted`] when the largest id is `i64::MAX`.
    pub fn next_id(&self) -> Result<RecipeId> {
        let now = Utc::now().timestamp_millis();
        match self.recipes.iter().map(|r| r.id).max() {
            None => Ok(RecipeId(now)),
            Some(max) => {
                let floor = max.0.checked_add(1).ok_or(RecipeError::IdsExhausted(max))?;
                Ok(RecipeId(now.max(floor)))
            }
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
