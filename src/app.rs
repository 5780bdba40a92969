//! Recipe Form App
//!
//! Root component: recipe editor on top, added recipes below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bootstrap::load_initial_recipes;
use crate::components::{NoticeBanner, RecipeEditor, RecipeListView, SaveButton};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::PageState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State (seeded with whatever the server rendered into the page)
    let store = Store::new(PageState::new(load_initial_recipes()));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(&config));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Recipes"</h1>

                <NoticeBanner />

                <RecipeEditor />

                <h2>"Added recipes"</h2>
                <RecipeListView />
                <SaveButton />
            </main>

            <footer class="app-footer">
                <a href="/view_db">"View saved recipes"</a>
            </footer>
        </div>
    }
}
