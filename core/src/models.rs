use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// Format used for `recipes.date_added`.
pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub rating: i64,
    pub date_added: String,
}

impl Recipe {
    /// Split the stored comma-joined ingredient text back into its parts.
    pub fn ingredient_list(&self) -> Vec<&str> {
        split_ingredients(&self.ingredients)
    }

    /// Parse `date_added`. Rows written by other tools may not follow the format.
    pub fn added_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date_added, DATE_ADDED_FORMAT).ok()
    }
}

#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub rating: i64,
}

impl NewRecipe {
    /// A recipe with the default rating of 0.
    pub fn new(
        name: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
            rating: 0,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = rating;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub favorite_category: Option<String>,
    pub max_rating: Option<i64>,
}

/// Join ingredient parts with `,`. Parts are stored as given, without trimming.
pub fn join_ingredients<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn split_ingredients(ingredients: &str) -> Vec<&str> {
    if ingredients.is_empty() {
        return Vec::new();
    }
    ingredients.split(',').collect()
}

/// Current local wall-clock time at second precision.
pub fn now_timestamp() -> String {
    Local::now().format(DATE_ADDED_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: 1,
            name: "Soup".to_string(),
            ingredients: "water,salt".to_string(),
            instructions: "boil".to_string(),
            rating: 0,
            date_added: "2024-03-01 18:30:05".to_string(),
        }
    }

    #[test]
    fn test_new_recipe_defaults_rating_to_zero() {
        let recipe = NewRecipe::new("Soup", "water,salt", "boil");
        assert_eq!(recipe.rating, 0);
        assert_eq!(recipe.with_rating(4).rating, 4);
    }

    #[test]
    fn test_join_and_split_ingredients() {
        let joined = join_ingredients(&["flour", " eggs", "milk"]);
        assert_eq!(joined, "flour, eggs,milk");
        assert_eq!(split_ingredients(&joined), vec!["flour", " eggs", "milk"]);
    }

    #[test]
    fn test_split_ingredients_empty() {
        assert!(split_ingredients("").is_empty());
        assert_eq!(split_ingredients("salt"), vec!["salt"]);
    }

    #[test]
    fn test_ingredient_list() {
        assert_eq!(sample_recipe().ingredient_list(), vec!["water", "salt"]);
    }

    #[test]
    fn test_added_at_parses_timestamp() {
        let added = sample_recipe().added_at().unwrap();
        assert_eq!(added.format("%H:%M:%S").to_string(), "18:30:05");

        let mut odd = sample_recipe();
        odd.date_added = "yesterday".to_string();
        assert!(odd.added_at().is_none());
    }

    #[test]
    fn test_now_timestamp_format() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, DATE_ADDED_FORMAT).is_ok());
    }

    #[test]
    fn test_recipe_json_shape() {
        let json = serde_json::to_value(sample_recipe()).unwrap();
        assert_eq!(json["name"], "Soup");
        assert_eq!(json["date_added"], "2024-03-01 18:30:05");
        assert_eq!(json["rating"], 0);
    }

    #[test]
    fn test_preferences_default_is_unset() {
        let prefs = Preferences::default();
        assert!(prefs.favorite_category.is_none());
        assert!(prefs.max_rating.is_none());
    }
}
