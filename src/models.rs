//! Frontend Models
//!
//! Data structures exchanged with the backend and rendered by the page.

use serde::{Deserialize, Deserializer, Serialize};

use crate::category::Category;

/// Ingredient as submitted to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub category: Option<Category>,
}

/// Ingredient as the backend suggests or stores it.
///
/// Older payloads carry bare strings; newer ones carry `{name, category}`
/// where the category is free text that may or may not be a known slug.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IngredientEntry {
    Plain(String),
    Detailed {
        name: String,
        #[serde(default, deserialize_with = "category_text")]
        category: Option<String>,
    },
}

/// Keep string categories; anything else (numbers, bools, objects) counts as absent
fn category_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_string)))
}

impl IngredientEntry {
    pub fn name(&self) -> &str {
        match self {
            IngredientEntry::Plain(name) => name,
            IngredientEntry::Detailed { name, .. } => name,
        }
    }

    /// Known category, or the catch-all
    pub fn category(&self) -> Category {
        match self {
            IngredientEntry::Plain(_) => Category::Other,
            IngredientEntry::Detailed { category, .. } => Category::coerce(category.as_deref()),
        }
    }

    pub fn to_ingredient(&self) -> Ingredient {
        Ingredient {
            name: self.name().to_string(),
            category: Some(self.category()),
        }
    }
}

/// Validated recipe ready for submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

/// Recipe rendered in the list view
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedRecipe {
    /// Stable render key
    pub key: u32,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    /// Dense 0-based index, sent as the delete path parameter
    pub position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// Transient message shown above the form
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub message: String,
}
