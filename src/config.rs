//! Application Configuration
//!
//! Fixed endpoints and asset URLs, provided to components via context.

use leptos::prelude::*;

pub const DEFAULT_PROJECTS_API_URL: &str = "https://apis.ccbp.in/ps/projects";
pub const DEFAULT_LOGO_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/projects-showcase/website-logo-img.png";
pub const DEFAULT_FAILURE_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/projects-showcase/failure-img.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the projects endpoint (without query string)
    pub projects_api_url: String,
    pub logo_url: String,
    pub failure_image_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            projects_api_url: DEFAULT_PROJECTS_API_URL.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            failure_image_url: DEFAULT_FAILURE_IMAGE_URL.to_string(),
        }
    }
}

/// Get the app config from context
pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}
