//! Recipe List Component
//!
//! Recipes added this session, each with a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::models::DisplayedRecipe;
use crate::recipes::EMPTY_PLACEHOLDER;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn RecipeListView() -> impl IntoView {
    let store = use_page_store();
    let ctx = use_app_context();

    let delete = move |position: usize| {
        let api = ctx.api();
        spawn_local(async move {
            actions::delete_recipe(&api, &store, position).await;
        });
    };

    // Position is part of the key so renumbered entries re-render
    view! {
        <section id="recipes-container" class="recipes">
            <Show
                when=move || !store.recipes().read().is_empty()
                fallback=|| view! { <p class="no-recipes">{EMPTY_PLACEHOLDER}</p> }
            >
                <For
                    each=move || store.recipes().read().entries().to_vec()
                    key=|recipe| (recipe.key, recipe.position)
                    children=move |recipe| recipe_item(recipe, delete)
                />
            </Show>
        </section>
    }
}

fn recipe_item(recipe: DisplayedRecipe, on_delete: impl Fn(usize) + 'static) -> impl IntoView {
    let position = recipe.position;
    view! {
        <div class="recipe-item" data-index=position.to_string()>
            <h3>{recipe.name}</h3>
            <ul>
                {recipe.ingredients.into_iter().map(|ingredient| view! {
                    <li>
                        {ingredient.name}
                        {ingredient.category.map(|category| view! {
                            <span class="ingredient-category">{category.label()}</span>
                        })}
                    </li>
                }).collect_view()}
            </ul>
            <button class="delete-btn" title="Delete recipe" on:click=move |_| on_delete(position)>
                "×"
            </button>
        </div>
    }
}
