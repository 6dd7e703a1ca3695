use crate::model::{Recipe, RecipeId};
use crate::store::{RecipeStore, StorageBackend};

/// The first recipe with `id`, if any.
pub fn find_by_id<B: StorageBackend>(store: &RecipeStore<B>, id: RecipeId) -> Option<Recipe> {
    store.find(id).cloned()
}
