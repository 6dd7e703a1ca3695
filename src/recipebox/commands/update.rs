use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecipeFields, RecipeId};
use crate::store::{RecipeStore, StorageBackend};
use tracing::debug;

/// Overwrites title, ingredients and instructions of the recipe with `id`.
/// The image is never touched. An unknown id changes nothing.
pub fn run<B: StorageBackend>(
    store: &mut RecipeStore<B>,
    id: RecipeId,
    fields: &RecipeFields,
) -> Result<CmdResult> {
    if !store.contains(id) {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("No recipe with id {}", id)));
        return Ok(result);
    }

    let updated = store.transact(|recipes| {
        let recipe = recipes.iter_mut().find(|r| r.id == id)?;
        recipe.apply(fields);
        Some(recipe.clone())
    })?;

    let mut result = CmdResult::default();
    if let Some(recipe) = updated {
        debug!(target: "recipebox::commands", id = %id, "Recipe updated");
        result.add_message(CmdMessage::success(format!(
            "Recipe updated ({}): {}",
            recipe.id, recipe.title
        )));
        result.affected_recipes.push(recipe);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, get};
    use crate::model::NewRecipe;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemoryBackend;

    #[test]
    fn updates_text_fields_only() {
        let mut store = RecipeStore::new(MemoryBackend::new());
        let added = add::run(
            &mut store,
            NewRecipe::new("Soup", "water", "boil").with_image("data:image/png;base64,AA=="),
        )
        .unwrap();
        let id = added.affected_recipes[0].id;

        run(
            &mut store,
            id,
            &RecipeFields::new("Stew", "water, beef", "simmer"),
        )
        .unwrap();

        let recipe = get::find_by_id(&store, id).unwrap();
        assert_eq!(recipe.title, "Stew");
        assert_eq!(recipe.ingredients, "water, beef");
        assert_eq!(recipe.instructions, "simmer");
        assert_eq!(recipe.image, "data:image/png;base64,AA==");
        assert_eq!(recipe.id, id);
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut store = StoreFixture::new().with_recipes(2).store;
        let before = store.recipes().to_vec();

        let result = run(&mut store, RecipeId(7), &RecipeFields::new("X", "Y", "Z")).unwrap();

        assert!(result.affected_recipes.is_empty());
        assert_eq!(store.recipes(), before.as_slice());
    }

    #[test]
    fn update_is_persisted() {
        let mut store = StoreFixture::new().with_recipes(2).store;
        let id = store.recipes()[0].id;
        run(&mut store, id, &RecipeFields::new("Renamed", "", "")).unwrap();

        let mut reloaded = RecipeStore::new(store.into_backend());
        reloaded.load().unwrap();
        assert_eq!(reloaded.recipes()[0].title, "Renamed");
        assert_eq!(reloaded.len(), 2);
    }
}
