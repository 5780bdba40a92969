//! Backend Command Wrappers
//!
//! Frontend bindings to the recipe backend's HTTP endpoints.

mod http;
mod recipe;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{IngredientEntry, RecipeDraft};

pub use http::HttpApi;
pub use recipe::*;

/// Failure talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("server rejected the request: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => ApiError::Status(status.as_u16()),
            None if e.is_decode() => ApiError::Decode(e.to_string()),
            None => ApiError::Transport(e.to_string()),
        }
    }
}

/// Operations the page needs from the backend
#[async_trait(?Send)]
pub trait RecipeApi {
    /// Suggested ingredients for a recipe name
    async fn default_ingredients(&self, recipe_name: &str) -> Result<Vec<IngredientEntry>, ApiError>;

    /// Store a new recipe in the backend's temporary list
    async fn add_recipe(&self, draft: &RecipeDraft) -> Result<(), ApiError>;

    /// Remove the recipe at a dense position
    async fn delete_recipe(&self, position: usize) -> Result<(), ApiError>;

    /// Persist the backend's temporary list to the database
    async fn save_to_db(&self) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_build_failure_is_transport() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Transport(_)));
    }
}
