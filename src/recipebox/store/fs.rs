use super::StorageBackend;
use crate::error::{RecipeError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-per-key storage rooted at a data directory.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RecipeError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RecipeError::Io(e)),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), value).map_err(RecipeError::Io)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RecipeError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewRecipe;
    use crate::store::{RecipeStore, RECIPES_KEY};
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::new(temp.path().join("nested"));
        assert_eq!(backend.get_item("recipes").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("data");
        let mut backend = FileBackend::new(&root);

        backend.set_item("recipes", "[]").unwrap();

        assert!(root.join("recipes.json").exists());
        assert_eq!(backend.get_item("recipes").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp.path());
        backend.set_item("k", "first value").unwrap();
        backend.set_item("k", "2").unwrap();
        assert_eq!(backend.get_item("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp.path());
        backend.remove_item("nothing").unwrap();

        backend.set_item("k", "v").unwrap();
        backend.remove_item("k").unwrap();
        assert_eq!(backend.get_item("k").unwrap(), None);
    }

    #[test]
    fn store_survives_reopen() {
        let temp = TempDir::new().unwrap();
        let mut store = RecipeStore::new(FileBackend::new(temp.path()));
        let id = store.next_id().unwrap();
        store
            .transact(|r| {
                r.push(crate::model::Recipe::new(
                    id,
                    NewRecipe::new("Soup", "water, salt", "boil"),
                ))
            })
            .unwrap();

        let mut reopened = RecipeStore::new(FileBackend::new(temp.path()));
        assert_eq!(reopened.load().unwrap(), 1);
        assert_eq!(reopened.recipes()[0].title, "Soup");
        assert_eq!(reopened.recipes()[0].id, id);
    }

    #[test]
    fn reads_browser_dump_layout() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::new(temp.path());
        backend
            .set_item(
                RECIPES_KEY,
                r#"[{"id":1686920000000,"title":"Pancakes","ingredients":"flour, eggs","instructions":"fry","image":""}]"#,
            )
            .unwrap();

        let mut store = RecipeStore::new(backend);
        store.load().unwrap();
        assert_eq!(store.recipes()[0].title, "Pancakes");
        assert_eq!(store.recipes()[0].id.0, 1686920000000);
    }
}
