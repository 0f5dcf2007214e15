use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use tracing::{debug, info};

use crate::models::Preferences;

/// Fixed key of the singleton preferences row.
const PREFERENCES_ID: i64 = 1;

/// User preferences stored as a single row in their own SQLite file.
///
/// Each setter upserts only its own column, so setting the max rating never
/// clears a previously stored favorite category and vice versa.
pub struct PreferenceStore {
    conn: Connection,
}

impl PreferenceStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open preferences database: {}", path.display()))?;
        let store = PreferenceStore { conn };
        store.migrate()?;
        info!(path = %path.display(), "opened preference store");
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = PreferenceStore { conn };
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
                    "CREATE TABLE IF NOT EXISTS preferences (
                        id INTEGER PRIMARY KEY CHECK (id = 1),
                        favorite_category TEXT,
                        max_rating INTEGER
                    );

                    PRAGMA user_version = 1;",
                )
                .context("Failed to create preferences table")?;
        }

        Ok(())
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close preferences database")?;
        info!("closed preference store");
        Ok(())
    }

    pub fn set_favorite_category(&self, name: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (id, favorite_category) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET favorite_category = excluded.favorite_category",
            params![PREFERENCES_ID, name],
        )?;
        debug!(name, "set favorite category");
        Ok(())
    }

    pub fn set_max_rating(&self, value: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (id, max_rating) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET max_rating = excluded.max_rating",
            params![PREFERENCES_ID, value],
        )?;
        debug!(value, "set max rating");
        Ok(())
    }

    pub fn get_favorite_category(&self) -> Result<Option<String>> {
        Ok(self.get_preferences()?.favorite_category)
    }

    pub fn get_max_rating(&self) -> Result<Option<i64>> {
        Ok(self.get_preferences()?.max_rating)
    }

    /// Both settings in one read; unset when no row exists yet.
    pub fn get_preferences(&self) -> Result<Preferences> {
        let mut stmt = self
            .conn
            .prepare("SELECT favorite_category, max_rating FROM preferences WHERE id = ?1")?;
        let mut rows = stmt.query(params![PREFERENCES_ID])?;
        if let Some(row) = rows.next()? {
            Ok(Preferences {
                favorite_category: row.get(0)?,
                max_rating: row.get(1)?,
            })
        } else {
            Ok(Preferences::default())
        }
    }
}
