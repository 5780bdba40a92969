//! UI Components
//!
//! Leptos components making up the recipe page.

mod recipe_editor;
mod ingredient_row;
mod category_select;
mod recipe_list;
mod save_button;
mod notice_banner;

pub use recipe_editor::RecipeEditor;
pub use ingredient_row::IngredientRowInput;
pub use category_select::CategorySelect;
pub use recipe_list::RecipeListView;
pub use save_button::SaveButton;
pub use notice_banner::NoticeBanner;
