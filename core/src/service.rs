use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::db::RecipeStore;
use crate::preferences::PreferenceStore;

pub const RECIPES_DB_FILE: &str = "recipes.db";
pub const PREFERENCES_DB_FILE: &str = "preferences.db";

/// Result of picking a favorite category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteOutcome {
    /// The category was new; it was registered and stored as the favorite.
    Set,
    /// The category already existed; preferences were left untouched.
    CategoryExists,
}

/// Both stores, each in its own database file.
pub struct Catalog {
    recipes: RecipeStore,
    preferences: PreferenceStore,
}

impl Catalog {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let recipes = RecipeStore::open(&data_dir.join(RECIPES_DB_FILE))?;
        let preferences = PreferenceStore::open(&data_dir.join(PREFERENCES_DB_FILE))?;
        Ok(Self {
            recipes,
            preferences,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            recipes: RecipeStore::open_in_memory()?,
            preferences: PreferenceStore::open_in_memory()?,
        })
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Register `name` as a category and, only if it was new, make it the favorite.
    pub fn choose_favorite_category(&self, name: &str) -> Result<FavoriteOutcome> {
        if self.recipes.add_category(name)? {
            self.preferences.set_favorite_category(name)?;
            Ok(FavoriteOutcome::Set)
        } else {
            Ok(FavoriteOutcome::CategoryExists)
        }
    }

    /// Close both handles. The preference store is closed even if the recipe store fails.
    pub fn close(self) -> Result<()> {
        let recipes = self.recipes.close();
        let preferences = self.preferences.close();
        recipes?;
        preferences
    }
}
