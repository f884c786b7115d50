//! Projects Context
//!
//! Reactive handles to the projects model, provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Category;
use crate::state::{self, ProjectsModel};

#[derive(Clone, Copy)]
pub struct ProjectsContext {
    pub model: RwSignal<ProjectsModel>,
    /// Selected category; only notifies on an actual change
    pub category: Memo<Category>,
    /// Selected category and reload count. Changes once per category
    /// change or retry; the load effect tracks it.
    pub load_request: Memo<(Category, u32)>,
    set_reload_trigger: WriteSignal<u32>,
}

impl ProjectsContext {
    pub fn new(model: RwSignal<ProjectsModel>) -> Self {
        let category = Memo::new(move |_| model.with(|m| m.category()));
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let load_request = Memo::new(move |_| (category.get(), reload_trigger.get()));
        Self {
            model,
            category,
            load_request,
            set_reload_trigger,
        }
    }

    /// Select a category; the load effect picks up the change
    pub fn change_category(&self, category: Category) {
        if state::change_category(&self.model, category) {
            log::debug!("category changed to {}", category);
        }
    }

    /// Refetch the selected category
    pub fn retry(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Get the projects context
pub fn use_projects() -> ProjectsContext {
    expect_context::<ProjectsContext>()
}
