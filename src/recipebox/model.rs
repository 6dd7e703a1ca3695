use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 2000-01-01T00:00:00Z in milliseconds.
const EARLIEST_TIMESTAMP_ID: i64 = 946_684_800_000;

/// Identifier of a recipe. Values are millisecond timestamps taken at creation,
/// bumped past the largest existing id when two recipes land in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub i64);

impl RecipeId {
    /// Creation time encoded in the id, if it is a plausible timestamp.
    /// Ids from before 2000-01-01 (small hand-written ids in imports) have none.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        if self.0 < EARLIEST_TIMESTAMP_ID {
            return None;
        }
        DateTime::from_timestamp_millis(self.0)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecipeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RecipeId)
    }
}

/// A catalog entry. Field names match the persisted JSON layout exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    /// A `data:` URL, or empty when the recipe has no picture.
    pub image: String,
}

impl Recipe {
    pub fn new(id: RecipeId, new: NewRecipe) -> Self {
        Self {
            id,
            title: new.title,
            ingredients: new.ingredients,
            instructions: new.instructions,
            image: new.image,
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Overwrites the text fields. The image is left untouched.
    pub fn apply(&mut self, fields: &RecipeFields) {
        self.title = fields.title.clone();
        self.ingredients = fields.ingredients.clone();
        self.instructions = fields.instructions.clone();
    }

    pub fn fields(&self) -> RecipeFields {
        RecipeFields {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }
}

/// Inputs for a recipe that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub image: String,
}

impl NewRecipe {
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
            image: String::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// The editable text fields of a recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFields {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
}

impl RecipeFields {
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_browser_field_layout() {
        let recipe = Recipe::new(
            RecipeId(1700000000000),
            NewRecipe::new("Soup", "water, salt", "boil"),
        );
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1700000000000i64,
                "title": "Soup",
                "ingredients": "water, salt",
                "instructions": "boil",
                "image": ""
            })
        );
    }

    #[test]
    fn apply_keeps_image() {
        let mut recipe = Recipe::new(
            RecipeId(1),
            NewRecipe::new("A", "b", "c").with_image("data:image/png;base64,AA=="),
        );
        recipe.apply(&RecipeFields::new("X", "y", "z"));
        assert_eq!(recipe.title, "X");
        assert_eq!(recipe.ingredients, "y");
        assert_eq!(recipe.instructions, "z");
        assert_eq!(recipe.image, "data:image/png;base64,AA==");
    }

    #[test]
    fn parses_id_from_string() {
        assert_eq!(" 42 ".parse::<RecipeId>().unwrap(), RecipeId(42));
        assert!("abc".parse::<RecipeId>().is_err());
    }

    #[test]
    fn id_encodes_creation_time() {
        let created = RecipeId(1_700_000_000_000).created_at().unwrap();
        assert_eq!(created.timestamp(), 1_700_000_000);
    }

    #[test]
    fn small_ids_have_no_creation_time() {
        assert_eq!(RecipeId(1).created_at(), None);
        assert_eq!(RecipeId(-5).created_at(), None);
        assert!(RecipeId(946_684_800_000).created_at().is_some());
    }
}
