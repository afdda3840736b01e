//! Record model for the directory content base

use serde::{Serialize, Deserialize};

/// A directory organization as the content base stores it.
///
/// Optional fields are genuinely optional in the base; presentation-level
/// reshaping (display logo, photo order, de-duplication) lives in the
/// content crate, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub slug: String,
    pub tagline: Option<String>,
    pub about: Option<String>,
    pub homepage: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub crunchbase: Option<String>,
    pub hq_location: Option<String>,
    pub headcount: Option<String>,
    pub organization_type: Option<String>,
    /// Roles the organization plays; "Capital" marks capital providers
    pub roles: Vec<String>,
    pub tags: Vec<String>,
    pub categories: Vec<Category>,
    /// The organization's own logo URL
    pub logo: Option<String>,
    /// Logo fallbacks scraped from linked profiles
    pub linkedin_logo: Option<String>,
    pub crunchbase_logo: Option<String>,
    /// Profile photos, stored newest-first
    pub photos: Vec<Photo>,
    pub capital_profile: Option<CapitalProfile>,
    pub source: Option<SourceAttribution>,
}

impl Organization {
    pub fn is_capital(&self) -> bool {
        self.roles.iter().any(|r| r == "Capital")
    }

    /// Route path of this organization's profile page
    pub fn profile_path(&self) -> String {
        format!("/organizations/{}", self.slug)
    }
}

/// A category, optionally nested under a parent category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub parent: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
        }
    }

    pub fn with_parent(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

/// A sector, the unit the site builds filtered index pages for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub slug: String,
}

impl Sector {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }
}

/// One profile photo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    pub title: String,
}

/// Capital-provider details attached to organizations with the Capital role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapitalProfile {
    pub capital_type: Vec<String>,
    pub stage: Vec<String>,
    pub check_size: Vec<String>,
    pub strategic: bool,
    pub impact_specific: bool,
}

/// Where a record came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceAttribution {
    pub name: String,
    pub url: String,
}

/// Derive a URL slug from a display name: lowercase, alphanumeric runs
/// joined by single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Solar Power"), "solar-power");
        assert_eq!(slugify("Wind & Tidal Energy"), "wind-tidal-energy");
        assert_eq!(slugify("  CO2 Removal  "), "co2-removal");
    }

    #[test]
    fn test_slugify_collapses_separator_runs() {
        assert_eq!(slugify("a --- b"), "a-b");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_capital_role_detection() {
        let org = Organization {
            roles: vec!["Organization".to_string(), "Capital".to_string()],
            ..Default::default()
        };
        assert!(org.is_capital());
        assert!(!Organization::default().is_capital());
    }

    #[test]
    fn test_profile_path() {
        let org = Organization {
            slug: "acme-solar".to_string(),
            ..Default::default()
        };
        assert_eq!(org.profile_path(), "/organizations/acme-solar");
    }
}
