//! UI Components
//!
//! Leptos components for the projects showcase.

mod category_select;
mod failure_view;
mod loader;
mod project_list;
mod projects_view;

pub use category_select::CategorySelect;
pub use failure_view::FailureView;
pub use loader::Loader;
pub use project_list::ProjectList;
pub use projects_view::ProjectsView;
