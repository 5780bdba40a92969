//! Save Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::use_page_store;

/// Persists every listed recipe to the database
#[component]
pub fn SaveButton() -> impl IntoView {
    let store = use_page_store();
    let ctx = use_app_context();

    let save = move |_| {
        let api = ctx.api();
        spawn_local(async move {
            actions::save_to_db(&api, &store).await;
        });
    };

    view! {
        <button id="save-db-btn" class="save-btn" on:click=save>
            "Save to Database"
        </button>
    }
}
