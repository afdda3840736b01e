//! Static page routes derived from the content base
//!
//! The site serves a fixed set of pages plus one page per sector and one per
//! organization. The table is rebuilt whenever a content source is loaded.

use serde::{Serialize, Deserialize};
use tracing::info;

use crate::directory::{Organization, Sector};

/// What a route renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageSpec {
    /// The organization index, optionally narrowed to one sector
    OrganizationIndex { sector: Option<Sector> },
    /// A single organization's profile page
    OrganizationProfile { slug: String },
    /// Capital providers
    CapitalIndex,
    About,
}

/// One static page bound to a URL path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    pub page: PageSpec,
}

/// Every static page the site serves, in deterministic order
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the table from the two content queries the site issues:
    /// sectors and organizations. Fixed pages come first, then one route
    /// per sector, then one per organization.
    pub fn build(sectors: &[Sector], organizations: &[Organization]) -> Self {
        let mut routes = vec![
            Route {
                path: "/organizations".to_string(),
                page: PageSpec::OrganizationIndex { sector: None },
            },
            Route {
                path: "/capital".to_string(),
                page: PageSpec::CapitalIndex,
            },
            Route {
                path: "/about".to_string(),
                page: PageSpec::About,
            },
        ];

        for sector in sectors {
            routes.push(Route {
                path: format!("/sectors/{}", sector.slug),
                page: PageSpec::OrganizationIndex {
                    sector: Some(sector.clone()),
                },
            });
        }

        for org in organizations {
            routes.push(Route {
                path: org.profile_path(),
                page: PageSpec::OrganizationProfile {
                    slug: org.slug.clone(),
                },
            });
        }

        info!(
            sectors = sectors.len(),
            organizations = organizations.len(),
            total = routes.len(),
            "built route table"
        );
        Self { routes }
    }

    /// Look a route up by its exact path
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_content() -> (Vec<Sector>, Vec<Organization>) {
        let sectors = vec![Sector::new("Renewable Energy"), Sector::new("Carbon Removal")];
        let organizations = vec![
            Organization {
                name: "Acme Solar".to_string(),
                slug: "acme-solar".to_string(),
                ..Default::default()
            },
            Organization {
                name: "Deep Roots".to_string(),
                slug: "deep-roots".to_string(),
                ..Default::default()
            },
        ];
        (sectors, organizations)
    }

    #[test]
    fn test_build_creates_fixed_and_derived_routes() {
        let (sectors, orgs) = sample_content();
        let table = RouteTable::build(&sectors, &orgs);

        // 3 fixed pages + 2 sectors + 2 organizations
        assert_eq!(table.len(), 7);
        assert!(table.resolve("/organizations").is_some());
        assert!(table.resolve("/capital").is_some());
        assert!(table.resolve("/about").is_some());
        assert!(table.resolve("/sectors/renewable-energy").is_some());
        assert!(table.resolve("/organizations/deep-roots").is_some());
    }

    #[test]
    fn test_sector_route_carries_context() {
        let (sectors, orgs) = sample_content();
        let table = RouteTable::build(&sectors, &orgs);

        let route = table.resolve("/sectors/carbon-removal").unwrap();
        match &route.page {
            PageSpec::OrganizationIndex { sector: Some(sector) } => {
                assert_eq!(sector.name, "Carbon Removal");
            }
            other => panic!("unexpected page: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown_path() {
        let table = RouteTable::build(&[], &[]);
        assert!(table.resolve("/sectors/nope").is_none());
        assert_eq!(table.len(), 3);
    }
}
