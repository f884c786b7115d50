//! HTTP Projects Client
//!
//! `GET {base}?category={id}` via the browser fetch API.

use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::ProjectsApi;
use crate::error::FetchError;
use crate::models::{Category, Project, ProjectsResponse};

/// Build the request URL for a category
pub fn projects_url(base_url: &str, category: Category) -> String {
    format!(
        "{}?category={}",
        base_url,
        utf8_percent_encode(category.id(), NON_ALPHANUMERIC)
    )
}

/// Parse a response body into the project list
pub fn parse_projects(body: &str) -> Result<Vec<Project>, FetchError> {
    let response: ProjectsResponse = serde_json::from_str(body)?;
    Ok(response.projects)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProjectsApi {
    base_url: String,
}

impl HttpProjectsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

#[async_trait(?Send)]
impl ProjectsApi for HttpProjectsApi {
    async fn fetch_projects(&self, category: Category) -> Result<Vec<Project>, FetchError> {
        let url = projects_url(&self.base_url, category);
        let started = js_sys::Date::now();

        let response = Request::get(&url).send().await?;
        log::debug!(
            "GET {} -> {} ({:.0} ms)",
            url,
            response.status(),
            js_sys::Date::now() - started
        );

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_projects(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_url() {
        assert_eq!(
            projects_url("https://apis.ccbp.in/ps/projects", Category::Responsive),
            "https://apis.ccbp.in/ps/projects?category=RESPONSIVE"
        );
        assert_eq!(projects_url("/api", Category::All), "/api?category=ALL");
    }

    #[test]
    fn test_parse_projects() {
        let body = r#"{"projects":[{"id":"1","name":"Foo","image_url":"http://x/1.png"}]}"#;
        let projects = parse_projects(body).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "1");
        assert_eq!(projects[0].name, "Foo");
    }

    #[test]
    fn test_parse_empty_projects() {
        assert_eq!(parse_projects(r#"{"projects":[]}"#).unwrap(), vec![]);
    }

    #[test]
    fn test_parse_missing_projects_key() {
        let err = parse_projects(r#"{"total":0}"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_parse_not_json() {
        let err = parse_projects("<html>502</html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
