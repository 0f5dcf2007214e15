use anyhow::Result;
use std::process::ExitCode;

use recipebox_core::service::Catalog;

use super::exit_not_found;
use super::helpers::{json_error, print_category_table};

pub(crate) fn cmd_category_add(catalog: &Catalog, name: &str, json: bool) -> Result<ExitCode> {
    if !catalog.recipes().add_category(name)? {
        if json {
            println!("{}", json_error(&format!("Category '{name}' already exists")));
        } else {
            eprintln!("Category '{name}' already exists");
        }
        return Ok(exit_not_found());
    }

    if json {
        println!("{}", serde_json::json!({ "created": name }));
    } else {
        println!("Added category: {name}");
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn cmd_category_list(catalog: &Catalog, json: bool) -> Result<ExitCode> {
    let categories = catalog.recipes().get_all_categories()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else if categories.is_empty() {
        eprintln!("No categories yet. Use `recipebox category add <name>` to create one.");
    } else {
        print_category_table(&categories);
    }
    Ok(ExitCode::SUCCESS)
}
