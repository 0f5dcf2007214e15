use anyhow::Result;
use std::process::ExitCode;

use recipebox_core::service::{Catalog, FavoriteOutcome};

use super::exit_not_found;

pub(crate) fn cmd_favorite(catalog: &Catalog, name: &str, json: bool) -> Result<ExitCode> {
    let outcome = catalog.choose_favorite_category(name)?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "category": name, "outcome": outcome })
        );
    } else {
        match outcome {
            FavoriteOutcome::Set => println!("Favorite category set to {name}"),
            FavoriteOutcome::CategoryExists => {
                eprintln!("Category '{name}' already exists; favorite unchanged");
            }
        }
    }

    Ok(match outcome {
        FavoriteOutcome::Set => ExitCode::SUCCESS,
        FavoriteOutcome::CategoryExists => exit_not_found(),
    })
}

pub(crate) fn cmd_max_rating(catalog: &Catalog, value: i64, json: bool) -> Result<ExitCode> {
    catalog.preferences().set_max_rating(value)?;
    if json {
        println!("{}", serde_json::json!({ "max_rating": value }));
    } else {
        println!("Max rating set to {value}");
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn cmd_prefs_show(catalog: &Catalog, json: bool) -> Result<ExitCode> {
    let prefs = catalog.preferences().get_preferences()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prefs)?);
    } else {
        let favorite = prefs.favorite_category.as_deref().unwrap_or("(not set)");
        let max_rating = prefs
            .max_rating
            .map_or_else(|| "(not set)".to_string(), |v| v.to_string());
        println!("Favorite category: {favorite}");
        println!("Max rating:        {max_rating}");
    }
    Ok(ExitCode::SUCCESS)
}
