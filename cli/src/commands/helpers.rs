use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use recipebox_core::models::{Category, Recipe};

pub(crate) fn print_recipe_table(recipes: &[Recipe]) {
    #[derive(Tabled)]
    struct RecipeRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Rating")]
        rating: i64,
        #[tabled(rename = "Ingredients")]
        ingredients: String,
        #[tabled(rename = "Added")]
        date_added: String,
    }

    let rows: Vec<RecipeRow> = recipes
        .iter()
        .map(|r| RecipeRow {
            id: r.id,
            name: truncate(&r.name, 35),
            rating: r.rating,
            ingredients: truncate(&r.ingredient_list().join(", "), 40),
            date_added: r.date_added.clone(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..3)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

pub(crate) fn print_recipe_detail(recipe: &Recipe) {
    println!("{} (id: {})", recipe.name, recipe.id);
    println!("  Rating:       {}", recipe.rating);
    println!("  Added:        {}", format_added(recipe));
    println!("  Ingredients:");
    for ingredient in recipe.ingredient_list() {
        println!("    - {ingredient}");
    }
    println!("  Instructions: {}", recipe.instructions);
}

/// Human-readable `date_added`, or the stored text when it does not parse.
pub(crate) fn format_added(recipe: &Recipe) -> String {
    recipe.added_at().map_or_else(
        || recipe.date_added.clone(),
        |at| at.format("%b %-d, %Y at %H:%M").to_string(),
    )
}

pub(crate) fn print_category_table(categories: &[Category]) {
    #[derive(Tabled)]
    struct CategoryRow {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "Name")]
        name: String,
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            name: c.name.clone(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

pub(crate) fn json_error(message: &str) -> String {
    #[derive(Serialize)]
    struct CliError<'a> {
        error: &'a str,
    }
    serde_json::to_string(&CliError { error: message })
        .unwrap_or_else(|_| format!("{{\"error\":\"{message}\"}}"))
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let end = s.char_indices().nth(max - 3).map_or(s.len(), |(i, _)| i);
        format!("{}...", &s[..end])
    }
}
