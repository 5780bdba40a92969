//! Page Actions
//!
//! The four backend round-trips the page performs. Each one snapshots what
//! it needs, awaits the backend, then applies the result in a single
//! update, so a failure never leaves the page half-changed.

use crate::commands::RecipeApi;
use crate::store::PageState;


pub const ADD_FAILED: &str = "Failed to add recipe. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete recipe. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save recipes to database. Please try again.";
pub const SAVE_SUCCEEDED: &str = "Recipes saved to database successfully";
pub const NOTHING_TO_SAVE: &str = "No recipes to save";

/// Access to the page state an action runs against
pub trait PageHandle {
    fn read_page<R>(&self, f: impl FnOnce(&PageState) -> R) -> R;
    fn update_page<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R;
}

/// Fill the ingredient rows with the backend's suggestions for the
/// current recipe name.
///
/// Lookup failures are logged and treated as "no suggestions". Returns
/// whether the rows were rewritten (false for a blank name or a response
/// that was overtaken by a newer lookup).
pub async fn populate_defaults<A: RecipeApi, H: PageHandle>(api: &A, page: &H) -> bool {
    let Some(request) = page.update_page(|p| p.form.begin_defaults_fetch()) else {
        return false;
    };

    let suggestions = match api.default_ingredients(&request.recipe_name).await {
        Ok(suggestions) => suggestions,
        Err(e) => {
            log::error!("Error fetching default ingredients for {:?}: {}", request.recipe_name, e);
            Vec::new()
        }
    };

    page.update_page(|p| p.form.apply_defaults(request.token, &suggestions))
}

/// Validate and submit the draft; on success list it and reset the form
pub async fn submit_recipe<A: RecipeApi, H: PageHandle>(api: &A, page: &H) -> bool {
    let draft = match page.read_page(|p| p.form.draft()) {
        Ok(draft) => draft,
        Err(e) => {
            page.update_page(|p| p.warn(e.to_string()));
            return false;
        }
    };

    match api.add_recipe(&draft).await {
        Ok(()) => {
            log::info!("Added recipe {:?} ({} ingredients)", draft.name, draft.ingredients.len());
            page.update_page(|p| {
                p.recipes.push_draft(draft);
                p.form.reset();
            });
            true
        }
        Err(e) => {
            log::error!("Error adding recipe: {}", e);
            page.update_page(|p| p.warn(ADD_FAILED));
            false
        }
    }
}

/// Delete the recipe at `position`; on success drop it from the list
pub async fn delete_recipe<A: RecipeApi, H: PageHandle>(api: &A, page: &H, position: usize) -> bool {
    match api.delete_recipe(position).await {
        Ok(()) => {
            page.update_page(|p| p.recipes.remove(position));
            true
        }
        Err(e) => {
            log::error!("Error deleting recipe at {}: {}", position, e);
            page.update_page(|p| p.warn(DELETE_FAILED));
            false
        }
    }
}

/// Ask the backend to persist everything; on success empty the view
pub async fn save_to_db<A: RecipeApi, H: PageHandle>(api: &A, page: &H) -> bool {
    if page.read_page(|p| p.recipes.is_empty()) {
        page.update_page(|p| p.warn(NOTHING_TO_SAVE));
        return false;
    }

    match api.save_to_db().await {
        Ok(()) => {
            page.update_page(|p| {
                p.recipes.clear();
                p.inform(SAVE_SUCCEEDED);
            });
            true
        }
        Err(e) => {
            log::error!("Error saving to database: {}", e);
            page.update_page(|p| p.warn(SAVE_FAILED));
            false
        }
    }
}
