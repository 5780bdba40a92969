//! Recipe List Model
//!
//! Recipes added during this session, addressed by dense position.

use crate::models::{DisplayedRecipe, Ingredient, RecipeDraft};

/// Text shown when the list has no entries
pub const EMPTY_PLACEHOLDER: &str = "No recipes added yet.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeList {
    entries: Vec<DisplayedRecipe>,
    next_key: u32,
}

impl RecipeList {
    pub fn entries(&self) -> &[DisplayedRecipe] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append at the next position; returns that position
    pub fn push(&mut self, name: String, ingredients: Vec<Ingredient>) -> usize {
        let position = self.entries.len();
        let key = self.next_key;
        self.next_key += 1;
        self.entries.push(DisplayedRecipe { key, name, ingredients, position });
        position
    }

    pub fn push_draft(&mut self, draft: RecipeDraft) -> usize {
        self.push(draft.name, draft.ingredients)
    }

    /// Remove the entry at `position` and renumber the rest.
    ///
    /// Out-of-range positions are ignored.
    pub fn remove(&mut self, position: usize) -> Option<DisplayedRecipe> {
        if position >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(position);
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.position = index;
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
