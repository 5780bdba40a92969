//! Ingredient Row Component
//!
//! One name input plus its category dropdown.

use leptos::prelude::*;

use crate::category::Category;
use crate::components::CategorySelect;
use crate::store::{store_edit_row_name, store_set_row_category, use_page_store, PageStateStoreFields};

#[component]
pub fn IngredientRowInput(row_id: u32) -> impl IntoView {
    let store = use_page_store();

    let name = move || {
        store.form().read().row(row_id).map(|row| row.name.clone()).unwrap_or_default()
    };
    let category = Signal::derive(move || store.form().read().row(row_id).and_then(|row| row.category));
    let set_category = move |category: Option<Category>| store_set_row_category(&store, row_id, category);

    view! {
        <div class="ingredient-row">
            <input
                type="text"
                class="ingredient-input"
                placeholder="Enter ingredient"
                prop:value=name
                on:input=move |ev| store_edit_row_name(&store, row_id, event_target_value(&ev))
            />
            <CategorySelect
                selected=category
                on_change=set_category
            />
        </div>
    }
}
