use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use crate::store::{RecipeStore, StorageBackend, RECIPES_KEY};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Imports a JSON array of recipes from `path`. See [`import_str`].
pub fn run<B: StorageBackend>(store: &mut RecipeStore<B>, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(RecipeError::Io)?;
    import_str(store, &raw)
}

/// Appends every recipe in `raw` whose id is not already taken, in the order given.
/// Nothing is written when `raw` cannot be decoded.
pub fn import_str<B: StorageBackend>(store: &mut RecipeStore<B>, raw: &str) -> Result<CmdResult> {
    let incoming: Vec<Recipe> =
        serde_json::from_str(raw).map_err(|source| RecipeError::Decode {
            key: RECIPES_KEY.to_string(),
            source,
        })?;

    let mut taken: HashSet<_> = store.recipes().iter().map(|r| r.id).collect();
    let mut accepted = Vec::new();
    let mut result = CmdResult::default();

    for recipe in incoming {
        if taken.insert(recipe.id) {
            accepted.push(recipe);
        } else {
            warn!(target: "recipebox::import", id = %recipe.id, "Skipping recipe with duplicate id");
            result.add_message(CmdMessage::warning(format!(
                "Skipped ({}): {} (id already present)",
                recipe.id, recipe.title
            )));
        }
    }

    if !accepted.is_empty() {
        let batch = accepted.clone();
        store.transact(move |recipes| recipes.extend(batch))?;
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        accepted.len()
    )));
    Ok(result.with_affected_recipes(accepted))
}
