use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecipeId;
use crate::store::{RecipeStore, StorageBackend};

use super::get::find_by_id;

pub fn run<B: StorageBackend>(store: &RecipeStore<B>, id: RecipeId) -> Result<CmdResult> {
    match find_by_id(store, id) {
        Some(recipe) => Ok(CmdResult::default().with_listed_recipes(vec![recipe])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!("No recipe with id {}", id)));
            Ok(result)
        }
    }
}
