//! Projects Showcase App
//!
//! Root component: provides config and projects state, renders the view.

use leptos::prelude::*;

use crate::components::ProjectsView;
use crate::config::AppConfig;
use crate::context::ProjectsContext;
use crate::state::ProjectsModel;

#[component]
pub fn App() -> impl IntoView {
    // State
    let model = RwSignal::new(ProjectsModel::new());

    // Provide context to all children
    provide_context(AppConfig::default());
    provide_context(ProjectsContext::new(model));

    view! {
        <ProjectsView />
    }
}
