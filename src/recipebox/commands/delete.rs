use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecipeId;
use crate::store::{RecipeStore, StorageBackend};
use tracing::debug;

/// Removes the recipe with `id`. An unknown id changes nothing.
pub fn run<B: StorageBackend>(store: &mut RecipeStore<B>, id: RecipeId) -> Result<CmdResult> {
    let removed = store.transact(|recipes| {
        let pos = recipes.iter().position(|r| r.id == id)?;
        Some(recipes.remove(pos))
    })?;

    let mut result = CmdResult::default();
    match removed {
        Some(recipe) => {
            debug!(target: "recipebox::commands", id = %id, "Recipe deleted");
            result.add_message(CmdMessage::success(format!(
                "Recipe deleted ({}): {}",
                recipe.id, recipe.title
            )));
            result.affected_recipes.push(recipe);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No recipe with id {}", id)));
        }
    }
    Ok(result)
}
