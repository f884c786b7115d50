//! Project List Component

use leptos::prelude::*;

use crate::models::Project;

/// Projects in response order. An empty list renders an empty `<ul>`.
#[component]
pub fn ProjectList(projects: Vec<Project>) -> impl IntoView {
    view! {
        <ul class="projects-list">
            {projects.into_iter().map(|project| {
                view! {
                    <li class="project-item">
                        <img class="project-img" src=project.image_url alt=project.name.clone() />
                        <p class="project-name">{project.name}</p>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
