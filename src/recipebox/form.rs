//! # Form Controller
//!
//! Holds what the user typed and decides what a submit means. The controller is
//! either [`FormMode::Idle`], where submit adds a recipe, or
//! [`FormMode::Editing`], where submit updates the recipe being edited and then
//! drops back to idle. One permanent `submit` branching on the mode replaces
//! per-edit handlers, so each edit session yields at most one update.
//!
//! Images are decoded before `add` runs. A decode failure aborts the submit,
//! leaves the store and the form untouched, and is returned to the caller.

use crate::api::{CmdMessage, CmdResult, RecipeApi};
use crate::error::Result;
use crate::image;
use crate::model::{NewRecipe, RecipeFields, RecipeId};
use crate::store::StorageBackend;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(RecipeId),
}

/// The recipe form's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    /// Picture to attach, read only when the form is submitted.
    pub image: Option<PathBuf>,
}

impl RecipeForm {
    pub fn fields(&self) -> RecipeFields {
        RecipeFields {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default)]
pub struct FormController {
    form: RecipeForm,
    mode: FormMode,
    search_query: String,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecipeForm {
        &mut self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Pre-fills the form from the recipe with `id` and switches to editing it.
    /// An unknown id leaves the controller as it was.
    pub fn begin_edit<B: StorageBackend>(&mut self, api: &RecipeApi<B>, id: RecipeId) -> CmdResult {
        let mut result = CmdResult::default();
        match api.get_recipe(id) {
            Some(recipe) => {
                self.form = RecipeForm {
                    title: recipe.title.clone(),
                    ingredients: recipe.ingredients.clone(),
                    instructions: recipe.instructions.clone(),
                    image: None,
                };
                self.mode = FormMode::Editing(id);
                result.listed_recipes.push(recipe);
            }
            None => result.add_message(CmdMessage::info(format!("No recipe with id {}", id))),
        }
        result
    }

    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Idle;
        self.form.reset();
    }

    /// Adds or updates depending on the mode, then resets the form.
    pub fn submit<B: StorageBackend>(&mut self, api: &mut RecipeApi<B>) -> Result<CmdResult> {
        match self.mode {
            FormMode::Idle => {
                let image = match &self.form.image {
                    Some(path) => image::encode_data_url(path)?,
                    None => String::new(),
                };
                let new = NewRecipe {
                    title: self.form.title.clone(),
                    ingredients: self.form.ingredients.clone(),
                    instructions: self.form.instructions.clone(),
                    image,
                };
                let result = api.add_recipe(new)?;
                self.form.reset();
                Ok(result)
            }
            FormMode::Editing(id) => {
                let mut result = api.update_recipe(id, &self.form.fields())?;
                if self.form.image.is_some() {
                    result.add_message(CmdMessage::warning(
                        "Images cannot be changed when editing; the picture was kept",
                    ));
                }
                self.mode = FormMode::Idle;
                self.form.reset();
                Ok(result)
            }
        }
    }

    pub fn search_query_mut(&mut self) -> &mut String {
        &mut self.search_query
    }

    /// Runs a search with the query field and clears it.
    pub fn submit_search<B: StorageBackend>(&mut self, api: &RecipeApi<B>) -> Result<CmdResult> {
        let query = std::mem::take(&mut self.search_query);
        api.search(&query)
    }
}
