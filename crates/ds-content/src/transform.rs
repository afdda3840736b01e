//! Presentational reshaping of directory records
//!
//! Pages consume the content base through these helpers rather than
//! reaching into raw records: index queries can return the same
//! organization twice, logos live in three places, and photos are stored
//! in the reverse of their display order.

use ahash::AHashSet;
use indexmap::IndexMap;

use ds_core::carousel::Slide;
use ds_core::directory::{Category, Organization};

/// De-duplicate organizations by name, keeping the first occurrence.
///
/// Sector index queries combine top-category and sub-category matches,
/// which may contain the same organization twice.
pub fn dedupe_organizations(organizations: Vec<Organization>) -> Vec<Organization> {
    let mut seen = AHashSet::new();
    organizations
        .into_iter()
        .filter(|org| seen.insert(org.name.clone()))
        .collect()
}

/// The logo URL to display for an organization: its own logo, then the
/// LinkedIn profile logo, then the Crunchbase one.
pub fn display_logo(org: &Organization) -> Option<&str> {
    org.logo
        .as_deref()
        .or(org.linkedin_logo.as_deref())
        .or(org.crunchbase_logo.as_deref())
}

/// Profile photos as carousel slides, in display order.
///
/// The content base stores photos newest-first; display order is the
/// reverse. Untitled photos fall back to the organization name.
pub fn display_photos(org: &Organization) -> Vec<Slide> {
    org.photos
        .iter()
        .rev()
        .map(|photo| {
            let title = if photo.title.is_empty() {
                org.name.clone()
            } else {
                photo.title.clone()
            };
            Slide::new(photo.url.clone(), title)
        })
        .collect()
}

/// Number of organizations under each category name, in first-seen order
pub fn category_counts(organizations: &[Organization]) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for org in organizations {
        for category in &org.categories {
            *counts.entry(category.name.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Only the organizations playing the Capital role
pub fn capital_organizations(organizations: &[Organization]) -> Vec<Organization> {
    organizations
        .iter()
        .filter(|org| org.is_capital())
        .cloned()
        .collect()
}

/// The category list shown in a profile snapshot: every sub-category, plus
/// the top-level categories not already represented by one of their
/// sub-categories.
pub fn snapshot_categories(categories: &[Category]) -> Vec<Category> {
    let represented: AHashSet<&str> = categories
        .iter()
        .filter_map(|c| c.parent.as_deref())
        .collect();

    let mut list: Vec<Category> = categories
        .iter()
        .filter(|c| c.is_top_level() && !represented.contains(c.name.as_str()))
        .cloned()
        .collect();
    list.extend(categories.iter().filter(|c| !c.is_top_level()).cloned());
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::directory::Photo;

    fn org(name: &str) -> Organization {
        Organization {
            name: name.to_string(),
            slug: ds_core::directory::slugify(name),
            ..Default::default()
        }
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let mut first = org("Acme Solar");
        first.tagline = Some("first".to_string());
        let mut second = org("Acme Solar");
        second.tagline = Some("second".to_string());

        let deduped = dedupe_organizations(vec![first, second, org("Deep Roots")]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].tagline.as_deref(), Some("first"));
    }

    #[test]
    fn test_display_logo_fallback_chain() {
        let mut org = org("Acme Solar");
        assert_eq!(display_logo(&org), None);

        org.crunchbase_logo = Some("cb.png".to_string());
        assert_eq!(display_logo(&org), Some("cb.png"));

        org.linkedin_logo = Some("li.png".to_string());
        assert_eq!(display_logo(&org), Some("li.png"));

        org.logo = Some("own.png".to_string());
        assert_eq!(display_logo(&org), Some("own.png"));
    }

    #[test]
    fn test_display_photos_reverses_and_titles() {
        let mut acme = org("Acme Solar");
        acme.photos = vec![
            Photo {
                url: "new.jpg".to_string(),
                title: String::new(),
            },
            Photo {
                url: "old.jpg".to_string(),
                title: "The beginning".to_string(),
            },
        ];

        let slides = display_photos(&acme);
        assert_eq!(slides[0].url, "old.jpg");
        assert_eq!(slides[0].title, "The beginning");
        assert_eq!(slides[1].url, "new.jpg");
        assert_eq!(slides[1].title, "Acme Solar");
    }

    #[test]
    fn test_category_counts() {
        let mut a = org("A");
        a.categories = vec![Category::new("Solar Power")];
        let mut b = org("B");
        b.categories = vec![Category::new("Solar Power"), Category::new("Finance")];

        let counts = category_counts(&[a, b]);
        assert_eq!(counts.get("Solar Power"), Some(&2));
        assert_eq!(counts.get("Finance"), Some(&1));
    }

    #[test]
    fn test_snapshot_categories_hides_represented_parents() {
        let categories = vec![
            Category::new("Renewable Energy"),
            Category::new("Finance"),
            Category::with_parent("Solar Power", "Renewable Energy"),
        ];

        let snapshot = snapshot_categories(&categories);
        let names: Vec<&str> = snapshot.iter().map(|c| c.name.as_str()).collect();
        // "Renewable Energy" is represented by its sub-category
        assert_eq!(names, vec!["Finance", "Solar Power"]);
    }

    #[test]
    fn test_capital_organizations() {
        let mut fund = org("Green Fund");
        fund.roles = vec!["Capital".to_string()];
        let startups = org("Acme Solar");

        let capital = capital_organizations(&[fund, startups]);
        assert_eq!(capital.len(), 1);
        assert_eq!(capital[0].name, "Green Fund");
    }
}
