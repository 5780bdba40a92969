//! Recipe Editor Component
//!
//! Recipe name plus the self-growing list of ingredient rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::IngredientRowInput;
use crate::context::use_app_context;
use crate::store::{store_add_row, store_set_recipe_name, use_page_store, PageStateStoreFields};

/// Form for drafting and submitting a recipe
#[component]
pub fn RecipeEditor() -> impl IntoView {
    let store = use_page_store();
    let ctx = use_app_context();

    let row_ids = move || {
        store.form().read().rows().iter().map(|row| row.id).collect::<Vec<_>>()
    };

    // Leaving the name field asks the backend for default ingredients
    let fetch_defaults = move |_: web_sys::FocusEvent| {
        let api = ctx.api();
        spawn_local(async move {
            actions::populate_defaults(&api, &store).await;
        });
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api();
        spawn_local(async move {
            actions::submit_recipe(&api, &store).await;
        });
    };

    view! {
        <form class="recipe-form" on:submit=submit>
            <label for="recipe-name">"Recipe name"</label>
            <input
                id="recipe-name"
                type="text"
                placeholder="Enter recipe name"
                prop:value=move || store.form().read().name.clone()
                on:input=move |ev| store_set_recipe_name(&store, event_target_value(&ev))
                on:blur=fetch_defaults
            />

            <div id="ingredients-container" class="ingredients">
                <For
                    each=row_ids
                    key=|id| *id
                    children=move |row_id| view! { <IngredientRowInput row_id=row_id /> }
                />
            </div>

            <div class="form-actions">
                <button type="button" class="add-row-btn" on:click=move |_| store_add_row(&store)>
                    "+ Ingredient"
                </button>
                <button type="submit" id="add-recipe-btn">"Add Recipe"</button>
            </div>
        </form>
    }
}
