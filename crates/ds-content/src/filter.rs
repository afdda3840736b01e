//! Organization filter state
//!
//! One criterion is active at a time, matching the site's filter chips:
//! picking a new criterion replaces the previous one, picking the active
//! one again clears it. The keyword search from the navbar narrows on top
//! of the chip selection.

use serde::{Serialize, Deserialize};

use ds_core::directory::{Organization, Sector};

/// A filter request raised by clicking a chip on an organization card
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    Sector(Sector),
    Tag(String),
    Location(String),
    Headcount(String),
    OrgType(String),
}

/// Active filter selection for organization lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationFilter {
    pub by_sector: Option<Sector>,
    pub by_tag: Option<String>,
    pub by_location: Option<String>,
    pub by_headcount: Option<String>,
    pub by_org_type: Option<String>,
    /// Navbar search; applied on top of the chip selection
    pub keyword: String,
}

impl OrganizationFilter {
    /// Whether any chip criterion is selected
    pub fn is_active(&self) -> bool {
        self.by_sector.is_some()
            || self.by_tag.is_some()
            || self.by_location.is_some()
            || self.by_headcount.is_some()
            || self.by_org_type.is_some()
    }

    /// Clear the chip selection, keeping the keyword
    pub fn clear(&mut self) {
        let keyword = std::mem::take(&mut self.keyword);
        *self = Self {
            keyword,
            ..Self::default()
        };
    }

    /// Apply a chip click: select the criterion, or clear it when it was
    /// already the active one
    pub fn toggle(&mut self, action: FilterAction) {
        let already_active = match &action {
            FilterAction::Sector(sector) => self.by_sector.as_ref() == Some(sector),
            FilterAction::Tag(tag) => self.by_tag.as_ref() == Some(tag),
            FilterAction::Location(location) => self.by_location.as_ref() == Some(location),
            FilterAction::Headcount(headcount) => self.by_headcount.as_ref() == Some(headcount),
            FilterAction::OrgType(org_type) => self.by_org_type.as_ref() == Some(org_type),
        };

        self.clear();
        if already_active {
            return;
        }
        match action {
            FilterAction::Sector(sector) => self.by_sector = Some(sector),
            FilterAction::Tag(tag) => self.by_tag = Some(tag),
            FilterAction::Location(location) => self.by_location = Some(location),
            FilterAction::Headcount(headcount) => self.by_headcount = Some(headcount),
            FilterAction::OrgType(org_type) => self.by_org_type = Some(org_type),
        }
    }

    /// Narrow a record list to the organizations matching the selection
    pub fn apply(&self, organizations: &[Organization]) -> Vec<Organization> {
        organizations
            .iter()
            .filter(|org| self.matches(org))
            .cloned()
            .collect()
    }

    fn matches(&self, org: &Organization) -> bool {
        if let Some(sector) = &self.by_sector {
            let in_sector = org.categories.iter().any(|category| {
                category.name == sector.name || category.parent.as_deref() == Some(&sector.name)
            });
            if !in_sector {
                return false;
            }
        }
        if let Some(tag) = &self.by_tag {
            if !org.tags.contains(tag) {
                return false;
            }
        }
        if let Some(location) = &self.by_location {
            if org.hq_location.as_ref() != Some(location) {
                return false;
            }
        }
        if let Some(headcount) = &self.by_headcount {
            if org.headcount.as_ref() != Some(headcount) {
                return false;
            }
        }
        if let Some(org_type) = &self.by_org_type {
            if org.organization_type.as_ref() != Some(org_type) {
                return false;
            }
        }

        let keyword = self.keyword.trim().to_lowercase();
        if !keyword.is_empty() {
            let haystack = format!(
                "{} {}",
                org.name.to_lowercase(),
                org.tagline.as_deref().unwrap_or("").to_lowercase()
            );
            if !haystack.contains(&keyword) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::directory::Category;

    fn sample() -> Vec<Organization> {
        vec![
            Organization {
                name: "Acme Solar".to_string(),
                slug: "acme-solar".to_string(),
                tagline: Some("Solar for all".to_string()),
                tags: vec!["solar".to_string(), "hardware".to_string()],
                hq_location: Some("Berlin".to_string()),
                categories: vec![Category::with_parent("Solar Power", "Renewable Energy")],
                ..Default::default()
            },
            Organization {
                name: "Deep Roots".to_string(),
                slug: "deep-roots".to_string(),
                tags: vec!["forests".to_string()],
                hq_location: Some("Lisbon".to_string()),
                categories: vec![Category::new("Carbon Removal")],
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_no_filter_passes_everything() {
        let filter = OrganizationFilter::default();
        assert_eq!(filter.apply(&sample()).len(), 2);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_tag_filter() {
        let mut filter = OrganizationFilter::default();
        filter.toggle(FilterAction::Tag("solar".to_string()));

        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Acme Solar");
    }

    #[test]
    fn test_toggle_same_chip_clears() {
        let mut filter = OrganizationFilter::default();
        filter.toggle(FilterAction::Tag("solar".to_string()));
        assert!(filter.is_active());

        filter.toggle(FilterAction::Tag("solar".to_string()));
        assert!(!filter.is_active());
    }

    #[test]
    fn test_new_chip_replaces_previous() {
        let mut filter = OrganizationFilter::default();
        filter.toggle(FilterAction::Tag("solar".to_string()));
        filter.toggle(FilterAction::Location("Lisbon".to_string()));

        assert_eq!(filter.by_tag, None);
        assert_eq!(filter.by_location.as_deref(), Some("Lisbon"));
        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Deep Roots");
    }

    #[test]
    fn test_sector_filter_matches_parent_links() {
        let mut filter = OrganizationFilter::default();
        filter.toggle(FilterAction::Sector(Sector::new("Renewable Energy")));

        let matched = filter.apply(&sample());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Acme Solar");
    }

    #[test]
    fn test_keyword_narrows_on_top_of_chips() {
        let mut filter = OrganizationFilter {
            keyword: "roots".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample()).len(), 1);

        // The keyword survives a chip clear
        filter.toggle(FilterAction::Tag("solar".to_string()));
        filter.clear();
        assert_eq!(filter.keyword, "roots");
    }
}
