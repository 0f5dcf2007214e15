mod category;
mod helpers;
mod prefs;
mod recipe;

use std::process::ExitCode;

pub(crate) use category::{cmd_category_add, cmd_category_list};
pub(crate) use prefs::{cmd_favorite, cmd_max_rating, cmd_prefs_show};
pub(crate) use recipe::{
    cmd_recipe_add, cmd_recipe_list, cmd_recipe_rate, cmd_recipe_search, cmd_recipe_view,
};

/// Exit status 2: a lookup found nothing or a write was refused.
pub(crate) fn exit_not_found() -> ExitCode {
    ExitCode::from(2)
}
