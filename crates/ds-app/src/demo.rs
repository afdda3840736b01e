//! Demo mode for the directory viewer
//! Ships a small organization directory so the app can be explored without
//! a content export.

use ds_content::MemoryContentSource;
use ds_core::directory::{slugify, CapitalProfile, Category, Organization, Photo, Sector};

fn photo(seed: &str, title: &str) -> Photo {
    Photo {
        url: format!("https://picsum.photos/seed/{seed}/960/540"),
        title: title.to_string(),
    }
}

fn organization(name: &str, tagline: &str) -> Organization {
    Organization {
        name: name.to_string(),
        slug: slugify(name),
        tagline: Some(tagline.to_string()),
        roles: vec!["Organization".to_string()],
        ..Default::default()
    }
}

/// Build the bundled demo directory
pub fn demo_content_source() -> MemoryContentSource {
    let sectors = vec![
        Sector::new("Renewable Energy"),
        Sector::new("Carbon Removal"),
        Sector::new("Food & Agriculture"),
    ];

    let categories = vec![
        Category::new("Renewable Energy"),
        Category::with_parent("Solar Power", "Renewable Energy"),
        Category::with_parent("Wind Power", "Renewable Energy"),
        Category::new("Carbon Removal"),
        Category::with_parent("Direct Air Capture", "Carbon Removal"),
        Category::new("Food & Agriculture"),
        Category::with_parent("Alternative Protein", "Food & Agriculture"),
    ];

    let mut acme = organization("Acme Solar", "Rooftop solar for dense cities");
    acme.about = Some(
        "Acme Solar designs, installs and operates rooftop photovoltaic \
         arrays for apartment buildings, splitting the generated power \
         between residents without individual meters."
            .to_string(),
    );
    acme.homepage = Some("https://acme-solar.example".to_string());
    acme.hq_location = Some("Berlin".to_string());
    acme.headcount = Some("11-50".to_string());
    acme.organization_type = Some("For-Profit".to_string());
    acme.tags = vec!["solar".to_string(), "hardware".to_string()];
    acme.categories = vec![Category::with_parent("Solar Power", "Renewable Energy")];
    acme.logo = Some("https://picsum.photos/seed/acme-logo/128/128".to_string());
    // Stored newest-first, like the content base
    acme.photos = vec![
        photo("acme-3", "Array on the Friedrichshain depot"),
        photo("acme-2", "Installation crew at work"),
        photo("acme-1", "The first prototype rig"),
    ];

    let mut breeze = organization("Breeze Collective", "Community-owned wind parks");
    breeze.hq_location = Some("Rotterdam".to_string());
    breeze.headcount = Some("1-10".to_string());
    breeze.organization_type = Some("Cooperative".to_string());
    breeze.tags = vec!["wind".to_string(), "community".to_string()];
    breeze.categories = vec![Category::with_parent("Wind Power", "Renewable Energy")];
    breeze.photos = vec![photo("breeze-1", "Turbines off the Maasvlakte")];

    let mut stonefall = organization("Stonefall", "Mineralizing CO2 into aggregate");
    stonefall.hq_location = Some("Reykjavik".to_string());
    stonefall.headcount = Some("51-200".to_string());
    stonefall.organization_type = Some("For-Profit".to_string());
    stonefall.tags = vec!["dac".to_string(), "materials".to_string()];
    stonefall.categories = vec![Category::with_parent("Direct Air Capture", "Carbon Removal")];
    stonefall.logo = Some("https://picsum.photos/seed/stonefall-logo/128/128".to_string());
    stonefall.photos = vec![
        photo("stonefall-2", "Injection site, autumn"),
        photo("stonefall-1", "Core samples"),
    ];

    let mut verdant = organization("Verdant Table", "Fermented proteins for canteens");
    verdant.hq_location = Some("Lyon".to_string());
    verdant.headcount = Some("11-50".to_string());
    verdant.organization_type = Some("For-Profit".to_string());
    verdant.tags = vec!["protein".to_string()];
    verdant.categories = vec![Category::with_parent(
        "Alternative Protein",
        "Food & Agriculture",
    )];

    let mut fund = organization("Green Horizon Fund", "Backing climate founders at seed");
    fund.roles = vec!["Capital".to_string()];
    fund.hq_location = Some("London".to_string());
    fund.organization_type = Some("VC Firm".to_string());
    fund.categories = vec![Category::new("Renewable Energy")];
    fund.capital_profile = Some(CapitalProfile {
        capital_type: vec!["Venture Capital".to_string()],
        stage: vec!["Pre-Seed".to_string(), "Seed".to_string()],
        check_size: vec!["$100k-$1M".to_string()],
        strategic: false,
        impact_specific: true,
    });

    let mut grants = organization("Tidewater Grants", "Non-dilutive funding for coastal work");
    grants.roles = vec!["Capital".to_string()];
    grants.hq_location = Some("Boston".to_string());
    grants.organization_type = Some("Foundation".to_string());
    grants.categories = vec![Category::new("Carbon Removal")];
    grants.capital_profile = Some(CapitalProfile {
        capital_type: vec!["Grant".to_string()],
        stage: vec!["Any".to_string()],
        check_size: vec!["$25k-$250k".to_string()],
        strategic: false,
        impact_specific: true,
    });

    MemoryContentSource::new(
        "demo directory",
        vec![acme, breeze, stonefall, verdant, fund, grants],
        sectors,
        categories,
    )
}
