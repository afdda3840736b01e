//! Resolve routes to concrete page views

use ds_core::routes::{PageSpec, Route};
use ds_core::state::AppSettings;
use ds_views::{
    AboutView, CapitalIndexView, OrganizationIndexView, OrganizationProfileView, PageView,
};

/// Build the page view for a resolved route
pub fn build_view(route: &Route, settings: &AppSettings) -> Box<dyn PageView> {
    match &route.page {
        PageSpec::OrganizationIndex { sector } => Box::new(OrganizationIndexView::new(
            route.path.clone(),
            sector.clone(),
        )),
        PageSpec::OrganizationProfile { slug } => Box::new(OrganizationProfileView::new(
            route.path.clone(),
            slug.clone(),
            settings.carousel_height,
        )),
        PageSpec::CapitalIndex => Box::new(CapitalIndexView::new(route.path.clone())),
        PageSpec::About => Box::new(AboutView::new(route.path.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::directory::Sector;
    use ds_core::routes::RouteTable;

    #[test]
    fn test_every_route_builds_a_view() {
        let sectors = vec![Sector::new("Renewable Energy")];
        let organizations = vec![ds_core::directory::Organization {
            name: "Acme Solar".to_string(),
            slug: "acme-solar".to_string(),
            ..Default::default()
        }];
        let table = RouteTable::build(&sectors, &organizations);
        let settings = AppSettings::default();

        for route in table.iter() {
            let view = build_view(route, &settings);
            assert_eq!(view.route_path(), route.path);
        }
    }
}
