use anyhow::Result;
use std::process::ExitCode;

use recipebox_core::models::{NewRecipe, join_ingredients};
use recipebox_core::service::Catalog;

use super::exit_not_found;
use super::helpers::{json_error, print_recipe_detail, print_recipe_table};

pub(crate) fn cmd_recipe_add(
    catalog: &Catalog,
    name: &str,
    ingredients: &[String],
    instructions: &str,
    rating: i64,
    json: bool,
) -> Result<ExitCode> {
    let recipe = catalog.recipes().add_recipe(
        &NewRecipe::new(name, join_ingredients(ingredients), instructions).with_rating(rating),
    )?;
    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        let id = recipe.id;
        println!("Added recipe: {name} (id: {id})");
        println!("Rate it with: recipebox rate {id} <rating>");
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn cmd_recipe_rate(
    catalog: &Catalog,
    id: i64,
    rating: i64,
    json: bool,
) -> Result<ExitCode> {
    // An unknown id is a no-op, not a failure.
    let matched = catalog.recipes().rate_recipe(id, rating)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "id": id, "rating": rating, "matched": matched })
        );
    } else if matched {
        println!("Rated recipe {id}: {rating}");
    } else {
        println!("No recipe with id {id}; nothing rated");
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn cmd_recipe_search(catalog: &Catalog, query: &str, json: bool) -> Result<ExitCode> {
    let recipes = catalog.recipes().search_recipes(query)?;

    if recipes.is_empty() {
        if json {
            println!("[]");
        } else {
            eprintln!("No recipes found for '{query}'");
        }
        return Ok(exit_not_found());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else {
        print_recipe_table(&recipes);
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn cmd_recipe_view(catalog: &Catalog, id: i64, json: bool) -> Result<ExitCode> {
    let Some(recipe) = catalog.recipes().view_recipe(id)? else {
        if json {
            println!("{}", json_error(&format!("Recipe {id} not found")));
        } else {
            eprintln!("Recipe {id} not found");
        }
        return Ok(exit_not_found());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
    } else {
        print_recipe_detail(&recipe);
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn cmd_recipe_list(catalog: &Catalog, json: bool) -> Result<ExitCode> {
    let recipes = catalog.recipes().list_recipes()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
    } else if recipes.is_empty() {
        eprintln!("No recipes yet. Use `recipebox add` or the interactive menu to add one.");
    } else {
        print_recipe_table(&recipes);
    }
    Ok(ExitCode::SUCCESS)
}
