//! Category Select Component
//!
//! Dropdown over the fixed ingredient categories.

use leptos::prelude::*;

use crate::category::Category;

/// Category dropdown; the blank option means "no category"
#[component]
pub fn CategorySelect(
    #[prop(into)] selected: Signal<Option<Category>>,
    #[prop(into)] on_change: Callback<Option<Category>>,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            prop:value=move || selected.get().map(Category::wire).unwrap_or("")
            on:change=move |ev| on_change.run(Category::parse(&event_target_value(&ev)))
        >
            <option value="">"Categorie..."</option>
            {Category::ALL.iter().map(|category| view! {
                <option value=category.wire()>{category.label()}</option>
            }).collect_view()}
        </select>
    }
}
