//! Recipe Form Model
//!
//! Ingredient rows, default-ingredient population and draft validation.
//! The rendered form is derived from this; nothing here touches the DOM.

use thiserror::Error;

use crate::category::Category;
use crate::models::{Ingredient, IngredientEntry, RecipeDraft};

/// Number of empty rows the form starts with and resets to
pub const RESET_ROW_COUNT: usize = 5;

/// One ingredient input row
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    /// Render key, unique within the form
    pub id: u32,
    pub name: String,
    pub category: Option<Category>,
}

impl IngredientRow {
    fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Pending default-ingredient lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultsRequest {
    pub recipe_name: String,
    /// Generation the response must still match to be applied
    pub token: u64,
}

/// Reasons a draft is rejected before reaching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a recipe name")]
    MissingName,
    #[error("Please add at least one ingredient")]
    NoIngredients,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeForm {
    pub name: String,
    rows: Vec<IngredientRow>,
    next_row_id: u32,
    defaults_generation: u64,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeForm {
    pub fn new() -> Self {
        let mut form = Self {
            name: String::new(),
            rows: Vec::with_capacity(RESET_ROW_COUNT),
            next_row_id: 0,
            defaults_generation: 0,
        };
        form.fill_empty_rows(RESET_ROW_COUNT);
        form
    }

    pub fn rows(&self) -> &[IngredientRow] {
        &self.rows
    }

    pub fn row(&self, row_id: u32) -> Option<&IngredientRow> {
        self.rows.iter().find(|row| row.id == row_id)
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn push_empty_row(&mut self) {
        let id = self.next_row_id;
        self.next_row_id += 1;
        self.rows.push(IngredientRow { id, name: String::new(), category: None });
    }

    fn fill_empty_rows(&mut self, count: usize) {
        for _ in 0..count {
            self.push_empty_row();
        }
    }

    /// Manual "add ingredient" action
    pub fn add_row(&mut self) {
        self.push_empty_row();
    }

    /// Apply typed text to a row. Filling the last row grows the list.
    ///
    /// Returns whether a row was appended.
    pub fn edit_row_name(&mut self, row_id: u32, value: String) -> bool {
        let Some(index) = self.rows.iter().position(|row| row.id == row_id) else {
            return false;
        };
        self.rows[index].name = value;

        let is_last = index + 1 == self.rows.len();
        if is_last && self.rows[index].is_filled() {
            self.push_empty_row();
            return true;
        }
        false
    }

    pub fn set_row_category(&mut self, row_id: u32, category: Option<Category>) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.id == row_id) {
            row.category = category;
        }
    }

    /// Start a default-ingredient lookup for the current name.
    ///
    /// Returns `None` when the trimmed name is empty. Any lookup started
    /// earlier becomes stale.
    pub fn begin_defaults_fetch(&mut self) -> Option<DefaultsRequest> {
        let recipe_name = self.name.trim();
        if recipe_name.is_empty() {
            return None;
        }
        self.defaults_generation += 1;
        Some(DefaultsRequest {
            recipe_name: recipe_name.to_string(),
            token: self.defaults_generation,
        })
    }

    /// Overwrite the rows with suggested ingredients.
    ///
    /// Returns `false` (leaving the rows untouched) when `token` is no
    /// longer the latest generation.
    pub fn apply_defaults(&mut self, token: u64, suggestions: &[IngredientEntry]) -> bool {
        if token != self.defaults_generation {
            log::debug!(
                "discarding stale default ingredients (token {}, current {})",
                token,
                self.defaults_generation
            );
            return false;
        }

        for row in &mut self.rows {
            row.name.clear();
            row.category = None;
        }
        if suggestions.len() > self.rows.len() {
            self.fill_empty_rows(suggestions.len() - self.rows.len());
        }
        for (row, suggestion) in self.rows.iter_mut().zip(suggestions) {
            row.name = suggestion.name().to_string();
            row.category = Some(suggestion.category());
        }

        if self.rows.last().is_some_and(IngredientRow::is_filled) {
            self.push_empty_row();
        }
        true
    }

    /// Validate and extract the recipe, dropping blank rows
    pub fn draft(&self) -> Result<RecipeDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let ingredients: Vec<Ingredient> = self
            .rows
            .iter()
            .filter(|row| row.is_filled())
            .map(|row| Ingredient {
                name: row.name.trim().to_string(),
                category: row.category,
            })
            .collect();
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }

        Ok(RecipeDraft { name: name.to_string(), ingredients })
    }

    /// Clear the name and go back to a fresh set of empty rows.
    ///
    /// In-flight default lookups are invalidated.
    pub fn reset(&mut self) {
        self.name.clear();
        self.rows.clear();
        self.fill_empty_rows(RESET_ROW_COUNT);
        self.defaults_generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_ids(form: &RecipeForm) -> Vec<u32> {
        form.rows().iter().map(|r| r.id).collect()
    }

    fn last_id(form: &RecipeForm) -> u32 {
        form.rows().last().unwrap().id
    }

    fn plain(names: &[&str]) -> Vec<IngredientEntry> {
        names.iter().map(|n| IngredientEntry::Plain(n.to_string())).collect()
    }

    #[test]
    fn test_new_form_has_reset_rows() {
        let form = RecipeForm::new();
        assert_eq!(form.rows().len(), RESET_ROW_COUNT);
        assert!(form.rows().iter().all(|r| r.name.is_empty() && r.category.is_none()));
    }

    #[test]
    fn test_filling_last_row_appends_one() {
        let mut form = RecipeForm::new();
        let last = last_id(&form);

        assert!(form.edit_row_name(last, "u".to_string()));
        assert_eq!(form.rows().len(), RESET_ROW_COUNT + 1);

        // Further typing in the same (no longer last) row does not grow
        assert!(!form.edit_row_name(last, "ui".to_string()));
        assert_eq!(form.rows().len(), RESET_ROW_COUNT + 1);

        let trailing = form.rows().last().unwrap();
        assert!(trailing.name.is_empty());
        assert!(trailing.category.is_none());
    }

    #[test]
    fn test_non_last_and_blank_edits_do_not_grow() {
        let mut form = RecipeForm::new();
        let first = form.rows()[0].id;
        let last = last_id(&form);

        assert!(!form.edit_row_name(first, "bloem".to_string()));
        assert!(!form.edit_row_name(last, "   ".to_string()));
        assert!(!form.edit_row_name(999, "ghost".to_string()));
        assert_eq!(form.rows().len(), RESET_ROW_COUNT);
    }

    #[test]
    fn test_growth_keeps_single_trailing_empty_row() {
        let mut form = RecipeForm::new();
        for word in ["a", "b", "c", "d", "e", "f", "g"] {
            let last = last_id(&form);
            form.edit_row_name(last, word.to_string());

            let empties_at_end = form
                .rows()
                .iter()
                .rev()
                .take_while(|r| r.name.trim().is_empty())
                .count();
            assert_eq!(empties_at_end, 1);
        }
        assert_eq!(form.rows().len(), RESET_ROW_COUNT + 7);
    }

    #[test]
    fn test_row_ids_are_unique() {
        let mut form = RecipeForm::new();
        form.add_row();
        form.reset();
        form.add_row();
        let mut ids = row_ids(&form);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), form.rows().len());
    }

    #[test]
    fn test_begin_fetch_requires_name() {
        let mut form = RecipeForm::new();
        assert!(form.begin_defaults_fetch().is_none());

        form.set_name("   ".to_string());
        assert!(form.begin_defaults_fetch().is_none());

        form.set_name("  Stamppot ".to_string());
        let request = form.begin_defaults_fetch().unwrap();
        assert_eq!(request.recipe_name, "Stamppot");
    }

    #[test]
    fn test_apply_defaults_grows_to_fit_plus_trailing() {
        let mut form = RecipeForm::new();
        form.set_name("erwtensoep".to_string());
        let request = form.begin_defaults_fetch().unwrap();

        let suggestions = plain(&["spliterwten", "varkensvlees", "prei", "wortel", "ui", "selderij", "laurier"]);
        assert!(form.apply_defaults(request.token, &suggestions));

        assert_eq!(form.rows().len(), 8);
        for (row, suggestion) in form.rows().iter().zip(&suggestions) {
            assert_eq!(row.name, suggestion.name());
            assert_eq!(row.category, Some(Category::Other));
        }
        assert!(form.rows()[7].name.is_empty());
        assert!(form.rows()[7].category.is_none());
    }

    #[test]
    fn test_apply_defaults_clears_existing_rows() {
        let mut form = RecipeForm::new();
        let ids = row_ids(&form);
        form.edit_row_name(ids[0], "old".to_string());
        form.set_row_category(ids[0], Some(Category::Bakery));
        form.edit_row_name(ids[3], "older".to_string());

        form.set_name("pannenkoeken".to_string());
        let request = form.begin_defaults_fetch().unwrap();
        let suggestions = vec![
            IngredientEntry::Detailed { name: "melk".to_string(), category: Some("zuivel".to_string()) },
            IngredientEntry::Detailed { name: "eieren".to_string(), category: Some("chicken stuff".to_string()) },
        ];
        form.apply_defaults(request.token, &suggestions);

        // Rows are cleared in place, not removed
        assert_eq!(row_ids(&form), ids);
        assert_eq!(form.rows()[0].name, "melk");
        assert_eq!(form.rows()[0].category, Some(Category::Dairy));
        assert_eq!(form.rows()[1].name, "eieren");
        assert_eq!(form.rows()[1].category, Some(Category::Other));
        assert!(form.rows()[2..].iter().all(|r| r.name.is_empty() && r.category.is_none()));
    }

    #[test]
    fn test_apply_defaults_exact_fit_appends_trailing() {
        let mut form = RecipeForm::new();
        form.set_name("hutspot".to_string());
        let request = form.begin_defaults_fetch().unwrap();
        form.apply_defaults(request.token, &plain(&["a", "b", "c", "d", "e"]));
        assert_eq!(form.rows().len(), RESET_ROW_COUNT + 1);
    }

    #[test]
    fn test_empty_defaults_clear_rows() {
        let mut form = RecipeForm::new();
        let first = form.rows()[0].id;
        form.edit_row_name(first, "kaas".to_string());

        form.set_name("onbekend".to_string());
        let request = form.begin_defaults_fetch().unwrap();
        assert!(form.apply_defaults(request.token, &[]));
        assert_eq!(form.rows().len(), RESET_ROW_COUNT);
        assert!(form.rows().iter().all(|r| r.name.is_empty()));
    }

    #[test]
    fn test_stale_defaults_are_discarded() {
        let mut form = RecipeForm::new();
        form.set_name("stamppot".to_string());
        let first = form.begin_defaults_fetch().unwrap();
        form.set_name("boerenkool".to_string());
        let second = form.begin_defaults_fetch().unwrap();

        assert!(form.apply_defaults(second.token, &plain(&["boerenkool", "rookworst"])));
        assert!(!form.apply_defaults(first.token, &plain(&["aardappelen"])));
        assert_eq!(form.rows()[0].name, "boerenkool");
        assert_eq!(form.rows()[1].name, "rookworst");
    }

    #[test]
    fn test_reset_invalidates_in_flight_defaults() {
        let mut form = RecipeForm::new();
        form.set_name("appeltaart".to_string());
        let request = form.begin_defaults_fetch().unwrap();
        form.reset();

        assert!(!form.apply_defaults(request.token, &plain(&["appels"])));
        assert!(form.rows().iter().all(|r| r.name.is_empty()));
    }

    #[test]
    fn test_draft_validation() {
        let mut form = RecipeForm::new();
        assert_eq!(form.draft(), Err(ValidationError::MissingName));

        form.set_name("Pasta".to_string());
        assert_eq!(form.draft(), Err(ValidationError::NoIngredients));

        let ids = row_ids(&form);
        form.edit_row_name(ids[1], "  ".to_string());
        assert_eq!(form.draft(), Err(ValidationError::NoIngredients));
    }

    #[test]
    fn test_draft_trims_and_skips_blank_rows() {
        let mut form = RecipeForm::new();
        form.set_name("  Pasta ".to_string());
        let ids = row_ids(&form);
        form.edit_row_name(ids[0], " Tomato ".to_string());
        form.set_row_category(ids[0], Some(Category::Other));
        form.edit_row_name(ids[2], "Basil".to_string());

        let draft = form.draft().unwrap();
        assert_eq!(draft.name, "Pasta");
        assert_eq!(
            draft.ingredients,
            vec![
                Ingredient { name: "Tomato".to_string(), category: Some(Category::Other) },
                Ingredient { name: "Basil".to_string(), category: None },
            ]
        );
    }

    #[test]
    fn test_set_row_category_targets_one_row() {
        let mut form = RecipeForm::new();
        let ids = row_ids(&form);

        form.set_row_category(ids[1], Some(Category::Dairy));
        assert_eq!(form.row(ids[1]).unwrap().category, Some(Category::Dairy));
        assert!(form.rows().iter().filter(|r| r.id != ids[1]).all(|r| r.category.is_none()));

        form.set_row_category(ids[1], None);
        assert_eq!(form.row(ids[1]).unwrap().category, None);

        form.set_row_category(9999, Some(Category::Bakery));
        assert!(form.rows().iter().all(|r| r.category.is_none()));
        assert_eq!(form.rows().len(), RESET_ROW_COUNT);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = RecipeForm::new();
        form.set_name("Pasta".to_string());
        for _ in 0..4 {
            let last = last_id(&form);
            form.edit_row_name(last, "x".to_string());
        }
        form.reset();

        assert!(form.name.is_empty());
        assert_eq!(form.rows().len(), RESET_ROW_COUNT);
        assert!(form.rows().iter().all(|r| r.name.is_empty() && r.category.is_none()));
    }
}
