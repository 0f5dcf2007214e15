mod commands;
mod config;
mod menu;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::{self, ExitCode};

use crate::commands::{
    cmd_category_add, cmd_category_list, cmd_favorite, cmd_max_rating, cmd_prefs_show,
    cmd_recipe_add, cmd_recipe_list, cmd_recipe_rate, cmd_recipe_search, cmd_recipe_view,
};
use crate::config::Config;
use crate::menu::run_menu;
use recipebox_core::service::Catalog;

#[derive(Parser)]
#[command(
    name = "recipebox",
    version,
    about = "A personal recipe catalog",
    long_about = "A personal recipe catalog.\n\nRun without a subcommand for the interactive menu."
)]
struct Cli {
    /// Directory holding recipes.db and preferences.db
    #[arg(long, global = true, env = "RECIPEBOX_DATA_DIR", value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive numbered menu (the default)
    Menu,
    /// Add a recipe
    Add {
        /// Recipe name
        name: String,
        /// Ingredients, comma-separated (e.g. "flour,eggs,milk")
        #[arg(short, long, value_delimiter = ',')]
        ingredients: Vec<String>,
        /// Preparation instructions
        #[arg(long, default_value = "")]
        instructions: String,
        /// Initial rating
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        rating: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the rating of a recipe
    Rate {
        /// Recipe ID
        id: i64,
        /// New rating (conventionally 1-5)
        #[arg(allow_negative_numbers = true)]
        rating: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search recipes by name, ingredients, or instructions
    Search {
        /// Substring to look for (empty matches everything)
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a recipe by ID
    View {
        /// Recipe ID
        id: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all recipes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage categories
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Register a new category and make it the favorite
    Favorite {
        /// Category name
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the maximum acceptable rating preference
    MaxRating {
        /// Maximum rating
        #[arg(allow_negative_numbers = true)]
        value: i64,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show stored preferences
    Prefs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// Add a category (names are unique)
    Add {
        /// Category name
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all categories
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.data_dir)?;
    let catalog = Catalog::open(&config.data_dir)?;

    let result = dispatch(&catalog, cli.command.unwrap_or(Commands::Menu));
    let closed = catalog.close();
    let code = result?;
    closed?;
    Ok(code)
}

fn dispatch(catalog: &Catalog, command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Menu => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_menu(catalog, &mut stdin.lock(), &mut stdout.lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Add {
            name,
            ingredients,
            instructions,
            rating,
            json,
        } => cmd_recipe_add(catalog, &name, &ingredients, &instructions, rating, json),
        Commands::Rate { id, rating, json } => cmd_recipe_rate(catalog, id, rating, json),
        Commands::Search { query, json } => cmd_recipe_search(catalog, &query, json),
        Commands::View { id, json } => cmd_recipe_view(catalog, id, json),
        Commands::List { json } => cmd_recipe_list(catalog, json),
        Commands::Category { command } => match command {
            CategoryCommands::Add { name, json } => cmd_category_add(catalog, &name, json),
            CategoryCommands::List { json } => cmd_category_list(catalog, json),
        },
        Commands::Favorite { name, json } => cmd_favorite(catalog, &name, json),
        Commands::MaxRating { value, json } => cmd_max_rating(catalog, value, json),
        Commands::Prefs { json } => cmd_prefs_show(catalog, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["recipebox"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_splits_ingredients() {
        let cli = Cli::try_parse_from([
            "recipebox",
            "add",
            "Soup",
            "--ingredients",
            "water,salt",
            "--instructions",
            "boil",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                name,
                ingredients,
                instructions,
                rating,
                json,
            }) => {
                assert_eq!(name, "Soup");
                assert_eq!(ingredients, vec!["water", "salt"]);
                assert_eq!(instructions, "boil");
                assert_eq!(rating, 0);
                assert!(!json);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_rate_rejects_non_numeric_rating() {
        assert!(Cli::try_parse_from(["recipebox", "rate", "1", "five"]).is_err());
    }

    #[test]
    fn test_data_dir_is_global() {
        let cli = Cli::try_parse_from(["recipebox", "list", "--data-dir", "/tmp/rb"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/rb")));
    }

    #[test]
    fn test_rate_unknown_id_succeeds() {
        let catalog = Catalog::open_in_memory().unwrap();
        let code = dispatch(
            &catalog,
            Commands::Rate {
                id: 99,
                rating: 5,
                json: false,
            },
        )
        .unwrap();
        assert!(same_code(code, ExitCode::SUCCESS));
        assert!(catalog.recipes().list_recipes().unwrap().is_empty());
    }

    #[test]
    fn test_view_unknown_id_exits_2() {
        let catalog = Catalog::open_in_memory().unwrap();
        let code = dispatch(&catalog, Commands::View { id: 99, json: true }).unwrap();
        assert!(same_code(code, ExitCode::from(2)));
    }

    #[test]
    fn test_dispatch_against_temp_catalog() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = Catalog::open(tmp.path()).unwrap();
        dispatch(
            &catalog,
            Commands::Add {
                name: "Soup".to_string(),
                ingredients: vec!["water".to_string(), "salt".to_string()],
                instructions: "boil".to_string(),
                rating: 3,
                json: true,
            },
        )
        .unwrap();
        dispatch(
            &catalog,
            Commands::Favorite {
                name: "Italian".to_string(),
                json: true,
            },
        )
        .unwrap();

        let recipe = catalog.recipes().view_recipe(1).unwrap().unwrap();
        assert_eq!(recipe.ingredients, "water,salt");
        assert_eq!(recipe.rating, 3);
        assert_eq!(
            catalog
                .preferences()
                .get_favorite_category()
                .unwrap()
                .as_deref(),
            Some("Italian")
        );
        catalog.close().unwrap();
    }
}
