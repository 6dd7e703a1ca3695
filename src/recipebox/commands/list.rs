use crate::commands::CmdResult;
use crate::error::Result;
use crate::pagination::Pager;
use crate::store::{RecipeStore, StorageBackend};

/// The recipes on the pager's current page.
pub fn run<B: StorageBackend>(store: &RecipeStore<B>, pager: &Pager) -> Result<CmdResult> {
    let recipes = store.recipes();
    let listed = pager.slice(recipes).to_vec();
    Ok(CmdResult::default()
        .with_listed_recipes(listed)
        .with_page(pager.info(recipes.len())))
}
