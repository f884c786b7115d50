//! Frontend Models
//!
//! Categories and the project records returned by the showcase API.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Project category used to filter the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Static,
    Responsive,
    Dynamic,
    React,
}

impl Category {
    /// Every category, in selector order
    pub const ALL_CATEGORIES: &'static [Category] = &[
        Category::All,
        Category::Static,
        Category::Responsive,
        Category::Dynamic,
        Category::React,
    ];

    /// Machine id sent as the `category` query parameter
    pub fn id(self) -> &'static str {
        match self {
            Category::All => "ALL",
            Category::Static => "STATIC",
            Category::Responsive => "RESPONSIVE",
            Category::Dynamic => "DYNAMIC",
            Category::React => "REACT",
        }
    }

    /// Human readable label for the selector
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Static => "Static",
            Category::Responsive => "Responsive",
            Category::Dynamic => "Dynamic",
            Category::React => "React",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Selector value outside the category set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category id: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.id() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Project record (matches API payload, extra fields ignored)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

/// Body of `GET {base}?category=...`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ids_round_trip() {
        for category in Category::ALL_CATEGORIES {
            assert_eq!(category.id().parse::<Category>(), Ok(*category));
        }
    }

    #[test]
    fn test_category_order_and_labels() {
        let labels: Vec<&str> = Category::ALL_CATEGORIES.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["All", "Static", "Responsive", "Dynamic", "React"]);
        assert_eq!(Category::default(), Category::All);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("all".parse::<Category>().is_err());
        assert!("VUE".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_unknown_category_message() {
        let err = "VUE".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category id: VUE");
    }

    #[test]
    fn test_project_ignores_extra_fields() {
        let json = r#"{"id":"7","name":"Bar","image_url":"http://x/7.png","category":"REACT"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Bar");
        assert_eq!(project.image_url, "http://x/7.png");
    }
}
