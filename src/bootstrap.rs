//! Initial Recipes
//!
//! The backend renders recipes still held in temporary storage into the
//! page as `<script type="application/json" id="initial-recipes">`.

use serde::Deserialize;

use crate::models::{Ingredient, IngredientEntry};
use crate::recipes::RecipeList;

const ELEMENT_ID: &str = "initial-recipes";

#[derive(Debug, Deserialize)]
struct StoredRecipe {
    name: String,
    #[serde(default)]
    ingredients: Vec<IngredientEntry>,
}

fn listed_ingredient(entry: &IngredientEntry) -> Ingredient {
    match entry {
        // Stored before categories existed
        IngredientEntry::Plain(name) => Ingredient { name: name.clone(), category: None },
        IngredientEntry::Detailed { .. } => entry.to_ingredient(),
    }
}

pub fn parse_initial_recipes(json: &str) -> Result<RecipeList, serde_json::Error> {
    let stored: Vec<StoredRecipe> = serde_json::from_str(json)?;
    let mut list = RecipeList::default();
    for recipe in stored {
        let ingredients = recipe.ingredients.iter().map(listed_ingredient).collect();
        list.push(recipe.name, ingredients);
    }
    Ok(list)
}

/// Recipes embedded in the page, or an empty list
pub fn load_initial_recipes() -> RecipeList {
    let Some(json) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return RecipeList::default();
    };

    match parse_initial_recipes(&json) {
        Ok(list) => {
            log::info!("Loaded {} recipes from page", list.len());
            list
        }
        Err(e) => {
            log::warn!("Ignoring malformed #{}: {}", ELEMENT_ID, e);
            RecipeList::default()
        }
    }
}
