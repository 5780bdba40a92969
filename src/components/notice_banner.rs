//! Notice Banner Component
//!
//! Shows the current warning or confirmation and hides it after a while.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::NoticeLevel;
use crate::store::{store_dismiss_notice, use_page_store, PageStateStoreFields};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_page_store();
    let ctx = use_app_context();

    // Auto-dismiss; a newer notice keeps its own timer
    Effect::new(move |_| {
        let Some(id) = store.notice().read().as_ref().map(|notice| notice.id) else {
            return;
        };
        let timeout = ctx.notice_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_dismiss_notice(&store, id);
        });
    });

    view! {
        {move || store.notice().get().map(|notice| {
            let id = notice.id;
            let class = match notice.level {
                NoticeLevel::Info => "notice notice-info",
                NoticeLevel::Warning => "notice notice-warning",
            };
            view! {
                <div class=class role="alert">
                    <span class="notice-text">{notice.message}</span>
                    <button class="notice-close" on:click=move |_| store_dismiss_notice(&store, id)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
