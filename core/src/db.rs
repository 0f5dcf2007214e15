use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use tracing::{debug, info};

use crate::models::{Category, NewRecipe, Recipe, now_timestamp};

/// Recipes and categories, backed by one SQLite file.
pub struct RecipeStore {
    conn: Connection,
}

impl RecipeStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open recipe database: {}", path.display()))?;
        let store = RecipeStore { conn };
        store.migrate()?;
        info!(path = %path.display(), "opened recipe store");
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = RecipeStore { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;

        if version < 1 {
            self.conn
                .execute_batch(
                    "CREATE TABLE IF NOT EXISTS recipes (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        name TEXT NOT NULL,
                        ingredients TEXT NOT NULL,
                        instructions TEXT NOT NULL,
                        rating INTEGER NOT NULL DEFAULT 0,
                        date_added TEXT NOT NULL
                    );

                    CREATE TABLE IF NOT EXISTS categories (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        name TEXT NOT NULL UNIQUE
                    );

                    PRAGMA user_version = 1;",
                )
                .context("Failed to create recipe tables")?;
        }

        Ok(())
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close recipe database")?;
        info!("closed recipe store");
        Ok(())
    }

    // --- Row mapping helpers ---

    fn recipe_from_row(row: &rusqlite::Row) -> rusqlite::Result<Recipe> {
        Ok(Recipe {
            id: row.get(0)?,
            name: row.get(1)?,
            ingredients: row.get(2)?,
            instructions: row.get(3)?,
            rating: row.get(4)?,
            date_added: row.get(5)?,
        })
    }

    fn category_from_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    // --- Recipes ---

    pub fn add_recipe(&self, recipe: &NewRecipe) -> Result<Recipe> {
        let date_added = now_timestamp();
        self.conn.execute(
            "INSERT INTO recipes (name, ingredients, instructions, rating, date_added)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                recipe.name,
                recipe.ingredients,
                recipe.instructions,
                recipe.rating,
                date_added,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, name = %recipe.name, "added recipe");
        Ok(Recipe {
            id,
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            rating: recipe.rating,
            date_added,
        })
    }

    /// Returns whether a recipe with `id` existed. An unknown id is not an error.
    pub fn rate_recipe(&self, id: i64, rating: i64) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE recipes SET rating = ?1 WHERE id = ?2",
            params![rating, id],
        )?;
        debug!(id, rating, matched = rows > 0, "rated recipe");
        Ok(rows > 0)
    }

    pub fn view_recipe(&self, id: i64) -> Result<Option<Recipe>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, ingredients, instructions, rating, date_added
             FROM recipes WHERE id = ?1",
        )?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Self::recipe_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    /// Literal substring match over name, ingredients and instructions.
    /// `LIKE` makes it case-insensitive for ASCII; an empty query matches everything.
    pub fn search_recipes(&self, query: &str) -> Result<Vec<Recipe>> {
        let escaped = query
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{escaped}%");
        let mut stmt = self.conn.prepare(
            "SELECT id, name, ingredients, instructions, rating, date_added
             FROM recipes
             WHERE name LIKE ?1 ESCAPE '\\'
                OR ingredients LIKE ?1 ESCAPE '\\'
                OR instructions LIKE ?1 ESCAPE '\\'
             ORDER BY id",
        )?;
        let recipes = stmt
            .query_map(params![pattern], Self::recipe_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(recipes)
    }

    pub fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, ingredients, instructions, rating, date_added
             FROM recipes ORDER BY id",
        )?;
        let recipes = stmt
            .query_map([], Self::recipe_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(recipes)
    }

    // --- Categories ---

    /// Returns `false` when a category with this name already exists.
    pub fn add_category(&self, name: &str) -> Result<bool> {
        let rows = self.conn.execute(
            "INSERT INTO categories (name) VALUES (?1) ON CONFLICT(name) DO NOTHING",
            params![name],
        )?;
        debug!(name, created = rows > 0, "add category");
        Ok(rows > 0)
    }

    pub fn get_all_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], Self::category_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }
}
