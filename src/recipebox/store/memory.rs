use super::StorageBackend;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory key-value storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::RecipeError;
    use crate::model::{NewRecipe, Recipe};
    use crate::store::RecipeStore;

    pub struct StoreFixture {
        pub store: RecipeStore<MemoryBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecipeStore::new(MemoryBackend::new()),
            }
        }

        pub fn with_recipes(mut self, count: usize) -> Self {
            for i in 0..count {
                let new = NewRecipe::new(
                    format!("Test Recipe {}", i + 1),
                    format!("Ingredients for recipe {}", i + 1),
                    format!("Instructions for recipe {}", i + 1),
                );
                self = self.push(new);
            }
            self
        }

        pub fn with_recipe(self, title: &str, ingredients: &str, instructions: &str) -> Self {
            self.push(NewRecipe::new(title, ingredients, instructions))
        }

        fn push(mut self, new: NewRecipe) -> Self {
            let id = self.store.next_id().unwrap();
            self.store
                .transact(|r| r.push(Recipe::new(id, new)))
                .unwrap();
            self
        }
    }

    /// A backend whose writes always fail, for exercising rollback paths.
    pub struct ReadOnlyBackend;

    impl StorageBackend for ReadOnlyBackend {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(RecipeError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only storage",
            )))
        }

        fn remove_item(&mut self, _key: &str) -> Result<()> {
            Ok(())
        }
    }
}
