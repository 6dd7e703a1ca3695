use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Recipe;
use crate::store::{RecipeStore, StorageBackend};

/// Recipes whose title or ingredients contain `query`, ignoring case.
/// The empty query matches everything. Store order is kept.
pub fn matching<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| {
            r.title.to_lowercase().contains(&query) || r.ingredients.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn run<B: StorageBackend>(store: &RecipeStore<B>, query: &str) -> Result<CmdResult> {
    let listed = matching(store.recipes(), query)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_recipes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result
            .listed_recipes
            .iter()
            .map(|r| r.title.as_str())
            .collect()
    }

    fn catalog() -> StoreFixture {
        StoreFixture::new()
            .with_recipe("Tomato Soup", "tomatoes, salt", "simmer")
            .with_recipe("Bread", "flour, water, SALT", "bake")
            .with_recipe("Salad", "lettuce", "toss with salt")
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let store = catalog().store;
        let result = run(&store, "").unwrap();
        assert_eq!(titles(&result), ["Tomato Soup", "Bread", "Salad"]);
    }

    #[test]
    fn matches_title_or_ingredients_ignoring_case() {
        let store = catalog().store;
        let result = run(&store, "Salt").unwrap();
        // "Salad" only mentions salt in its instructions, which are not searched
        assert_eq!(titles(&result), ["Tomato Soup", "Bread"]);

        let result = run(&store, "SAL").unwrap();
        assert_eq!(titles(&result), ["Tomato Soup", "Bread", "Salad"]);
    }

    #[test]
    fn title_match() {
        let store = catalog().store;
        let result = run(&store, "bread").unwrap();
        assert_eq!(titles(&result), ["Bread"]);
    }

    #[test]
    fn no_match_is_empty() {
        let store = catalog().store;
        assert!(run(&store, "chocolate").unwrap().listed_recipes.is_empty());
    }
}
