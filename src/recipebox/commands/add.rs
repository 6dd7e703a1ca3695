use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewRecipe, Recipe};
use crate::store::{RecipeStore, StorageBackend};
use tracing::debug;

/// Appends a recipe with a fresh id. Any input is accepted, empty strings included.
pub fn run<B: StorageBackend>(store: &mut RecipeStore<B>, new: NewRecipe) -> Result<CmdResult> {
    let recipe = Recipe::new(store.next_id()?, new);
    store.transact(|recipes| recipes.push(recipe.clone()))?;
    debug!(target: "recipebox::commands", id = %recipe.id, "Recipe added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe added ({}): {}",
        recipe.id, recipe.title
    )));
    result.affected_recipes.push(recipe);
    Ok(result)
}
