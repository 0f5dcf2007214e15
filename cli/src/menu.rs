use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use recipebox_core::models::{NewRecipe, join_ingredients};
use recipebox_core::service::{Catalog, FavoriteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddRecipe,
    RateRecipe,
    SearchRecipes,
    ViewRecipe,
    SetFavoriteCategory,
    SetMaxRating,
    Exit,
}

impl MenuChoice {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::AddRecipe),
            "2" => Some(Self::RateRecipe),
            "3" => Some(Self::SearchRecipes),
            "4" => Some(Self::ViewRecipe),
            "5" => Some(Self::SetFavoriteCategory),
            "6" => Some(Self::SetMaxRating),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nRecipe Manager Menu:
1. Add Recipe
2. Rate Recipe
3. Search Recipes
4. View Recipe
5. Set Favorite Category
6. Set Max Rating
7. Exit";

/// Print `message`, then read one line without its line ending. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn parse_number(s: &str) -> Result<i64> {
    s.trim()
        .parse()
        .with_context(|| format!("Invalid number: '{s}'"))
}

/// A recipe ID that is not a number cannot match any row.
fn parse_recipe_id(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Run the numbered menu until option 7 or end of input.
///
/// Malformed ratings are fatal and end the loop with an error. A malformed
/// recipe ID behaves like an unknown one.
pub(crate) fn run_menu<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    // Each prompt ends the menu quietly when input runs out.
    macro_rules! ask {
        ($message:expr) => {
            match prompt(input, out, $message)? {
                Some(line) => line,
                None => return Ok(()),
            }
        };
    }

    loop {
        writeln!(out, "{MENU}")?;
        let choice = ask!("Enter your choice: ");
        debug!(choice = %choice, "menu choice");

        let Some(choice) = MenuChoice::parse(&choice) else {
            writeln!(out, "Invalid choice. Please try again.")?;
            continue;
        };

        match choice {
            MenuChoice::AddRecipe => {
                let name = ask!("Enter recipe name: ");
                let ingredients = ask!("Enter ingredients (comma-separated): ");
                let ingredients: Vec<&str> = ingredients.split(',').collect();
                let instructions = ask!("Enter instructions: ");
                catalog.recipes().add_recipe(&NewRecipe::new(
                    name,
                    join_ingredients(&ingredients),
                    instructions,
                ))?;
                writeln!(out, "Recipe added successfully!")?;
            }
            MenuChoice::RateRecipe => {
                let id = parse_recipe_id(&ask!("Enter recipe ID: "));
                let rating = parse_number(&ask!("Enter rating (1-5): "))?;
                if let Some(id) = id {
                    catalog.recipes().rate_recipe(id, rating)?;
                }
                writeln!(out, "Recipe rated successfully!")?;
            }
            MenuChoice::SearchRecipes => {
                let query = ask!("Enter search query: ");
                let recipes = catalog.recipes().search_recipes(&query)?;
                if recipes.is_empty() {
                    writeln!(out, "No recipes found.")?;
                } else {
                    writeln!(out, "Search results:")?;
                    for recipe in &recipes {
                        writeln!(out, "ID: {}, Name: {}", recipe.id, recipe.name)?;
                    }
                }
            }
            MenuChoice::ViewRecipe => {
                let id = parse_recipe_id(&ask!("Enter recipe ID: "));
                let recipe = match id {
                    Some(id) => catalog.recipes().view_recipe(id)?,
                    None => None,
                };
                if let Some(recipe) = recipe {
                    writeln!(out, "Recipe details:")?;
                    writeln!(out, "Name: {}", recipe.name)?;
                    writeln!(out, "Ingredients: {}", recipe.ingredients)?;
                    writeln!(out, "Instructions: {}", recipe.instructions)?;
                    writeln!(out, "Rating: {}", recipe.rating)?;
                } else {
                    writeln!(out, "Recipe not found.")?;
                }
            }
            MenuChoice::SetFavoriteCategory => {
                let category = ask!("Enter favorite category: ");
                match catalog.choose_favorite_category(&category)? {
                    FavoriteOutcome::Set => {
                        writeln!(out, "Favorite category set successfully!")?;
                    }
                    FavoriteOutcome::CategoryExists => {
                        writeln!(out, "Category already exists.")?;
                    }
                }
            }
            MenuChoice::SetMaxRating => {
                let max_rating = parse_number(&ask!("Enter max rating (1-5): "))?;
                catalog.preferences().set_max_rating(max_rating)?;
                writeln!(out, "Max rating set successfully!")?;
            }
            MenuChoice::Exit => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
        }
    }
}
