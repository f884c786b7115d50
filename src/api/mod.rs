//! Projects API
//!
//! Client for the showcase endpoint, behind a trait so the load flow
//! does not depend on the browser `fetch`.

pub mod http;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::{Category, Project};

pub use http::HttpProjectsApi;

/// Source of project records for a category
#[async_trait(?Send)]
pub trait ProjectsApi {
    async fn fetch_projects(&self, category: Category) -> Result<Vec<Project>, FetchError>;
}
