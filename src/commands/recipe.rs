//! Recipe Commands
//!
//! Request and response shapes for the recipe endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ApiError, HttpApi, RecipeApi};
use crate::models::{IngredientEntry, RecipeDraft};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct DefaultIngredientsArgs<'a> {
    pub recipe_name: &'a str,
}

// ========================
// Response Structs
// ========================

/// `null` or a missing field means "no suggestions"
#[derive(Debug, Deserialize)]
pub struct DefaultIngredientsResponse {
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientEntry>>,
}

/// `{success, error?}` reply shared by the mutating endpoints
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl StatusResponse {
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.error))
        }
    }
}

// ========================
// Commands
// ========================

#[async_trait(?Send)]
impl RecipeApi for HttpApi {
    async fn default_ingredients(&self, recipe_name: &str) -> Result<Vec<IngredientEntry>, ApiError> {
        if recipe_name.is_empty() {
            return Ok(Vec::new());
        }
        let response: DefaultIngredientsResponse = self
            .post_json("/get_default_ingredients", &DefaultIngredientsArgs { recipe_name })
            .await?;
        Ok(response.ingredients.unwrap_or_default())
    }

    async fn add_recipe(&self, draft: &RecipeDraft) -> Result<(), ApiError> {
        self.post_json::<_, StatusResponse>("/add_recipe", draft).await?.into_result()
    }

    async fn delete_recipe(&self, position: usize) -> Result<(), ApiError> {
        self.delete::<StatusResponse>(&format!("/delete_recipe/{}", position)).await?.into_result()
    }

    async fn save_to_db(&self) -> Result<(), ApiError> {
        self.post_empty::<StatusResponse>("/save_to_db").await?.into_result()
    }
}
