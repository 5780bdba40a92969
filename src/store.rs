//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::PageHandle;
use crate::category::Category;
use crate::form::RecipeForm;
use crate::models::{Notice, NoticeLevel};
use crate::recipes::RecipeList;

/// Everything the page renders, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Draft recipe being typed
    pub form: RecipeForm,
    /// Recipes added this session
    pub recipes: RecipeList,
    /// Message currently shown to the user
    pub notice: Option<Notice>,
    /// Last notice id handed out
    pub notice_seq: u32,
}

impl PageState {
    pub fn new(recipes: RecipeList) -> Self {
        Self {
            recipes,
            ..Default::default()
        }
    }

    fn show(&mut self, level: NoticeLevel, message: String) -> u32 {
        self.notice_seq += 1;
        let id = self.notice_seq;
        self.notice = Some(Notice { id, level, message });
        id
    }

    /// Show a warning, replacing any current notice
    pub fn warn(&mut self, message: impl Into<String>) -> u32 {
        self.show(NoticeLevel::Warning, message.into())
    }

    /// Show a confirmation, replacing any current notice
    pub fn inform(&mut self, message: impl Into<String>) -> u32 {
        self.show(NoticeLevel::Info, message.into())
    }

    /// Hide the notice if it is still the one with `id`
    pub fn dismiss_notice(&mut self, id: u32) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

impl PageHandle for PageStore {
    fn read_page<R>(&self, f: impl FnOnce(&PageState) -> R) -> R {
        let guard = self.read_untracked();
        f(&*guard)
    }

    fn update_page<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_recipe_name(store: &PageStore, name: String) {
    store.form().write().set_name(name);
}

/// Typed text into a row (may grow the row list)
pub fn store_edit_row_name(store: &PageStore, row_id: u32, value: String) {
    store.form().write().edit_row_name(row_id, value);
}

pub fn store_set_row_category(store: &PageStore, row_id: u32, category: Option<Category>) {
    store.form().write().set_row_category(row_id, category);
}

pub fn store_add_row(store: &PageStore) {
    store.form().write().add_row();
}

pub fn store_dismiss_notice(store: &PageStore, id: u32) {
    store.update_page(|page| page.dismiss_notice(id));
}
