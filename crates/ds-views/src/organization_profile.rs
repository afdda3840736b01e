//! Organization profile page
//!
//! Header with logo and tagline, the photo carousel, the long-form about
//! text and the sidebar sections (snapshot, links, edit history).

use egui::{RichText, Ui, Vec2};
use tracing::error;

use ds_content::transform;
use ds_core::directory::Organization;
use ds_ui::{Carousel, KeyboardScope, ScrollAreaExt, WidgetId};

use crate::{PageView, SiteContext};

const ORGANIZATION_EDIT_FORM_URL: &str = "https://airtable.com/shrO0ZfwQLTrsOx5v";
const CAPITAL_EDIT_FORM_URL: &str = "https://airtable.com/shrmg2dqeV0tkDJBL";

/// A single organization's profile page
pub struct OrganizationProfileView {
    route_path: String,
    slug: String,
    carousel_height: f32,
    record: Option<Organization>,
    carousel: Option<Carousel>,
    error: Option<String>,
}

impl OrganizationProfileView {
    pub fn new(route_path: impl Into<String>, slug: impl Into<String>, carousel_height: f32) -> Self {
        Self {
            route_path: route_path.into(),
            slug: slug.into(),
            carousel_height,
            record: None,
            carousel: None,
            error: None,
        }
    }

    fn ensure_loaded(&mut self, ctx: &SiteContext) {
        if self.record.is_some() || self.error.is_some() {
            return;
        }
        match ctx.load_organizations() {
            Ok(organizations) => {
                match organizations.into_iter().find(|org| org.slug == self.slug) {
                    Some(org) => {
                        let slides = transform::display_photos(&org);
                        if !slides.is_empty() {
                            self.carousel = Some(
                                Carousel::new(slides)
                                    .with_height(self.carousel_height)
                                    .with_keyboard_scope(KeyboardScope::Hovered),
                            );
                        }
                        self.record = Some(org);
                    }
                    None => {
                        self.error = Some(format!("No organization at /organizations/{}", self.slug));
                    }
                }
            }
            Err(err) => {
                error!(slug = %self.slug, "failed to load organization profile: {err:#}");
                self.error = Some(err.to_string());
            }
        }
    }

    fn show_header(&self, ui: &mut Ui, org: &Organization) {
        ui.horizontal(|ui| {
            if let Some(logo) = transform::display_logo(org) {
                ui.add(
                    egui::Image::from_uri(logo.to_string())
                        .fit_to_exact_size(Vec2::splat(96.0))
                        .rounding(egui::Rounding::same(8.0)),
                );
            }
            ui.vertical(|ui| {
                ui.heading(&org.name);
                if let Some(tagline) = &org.tagline {
                    ui.label(RichText::new(tagline).color(ds_ui::muted_text_color()));
                }
            });
        });
    }

    fn show_sidebar(&self, ui: &mut Ui, org: &Organization) {
        sidebar_section(ui, "In a snapshot", |ui| {
            for category in transform::snapshot_categories(&org.categories) {
                ui.label(category.name);
            }
            if let Some(location) = &org.hq_location {
                ui.label(location);
            }
            if let Some(org_type) = &org.organization_type {
                ui.label(org_type);
            }
            if let Some(headcount) = &org.headcount {
                ui.label(format!("{headcount} employees"));
            }
        });

        sidebar_section(ui, "Links", |ui| {
            for (label, url) in [
                ("Homepage", &org.homepage),
                ("Crunchbase", &org.crunchbase),
                ("LinkedIn", &org.linkedin),
                ("Twitter", &org.twitter),
                ("Facebook", &org.facebook),
            ] {
                if let Some(url) = url {
                    ui.hyperlink_to(label, url);
                }
            }
        });

        sidebar_section(ui, "Edit History", |ui| {
            let form = if org.is_capital() {
                CAPITAL_EDIT_FORM_URL
            } else {
                ORGANIZATION_EDIT_FORM_URL
            };
            ui.hyperlink_to("Suggest an Edit", form);
            if let Some(source) = &org.source {
                ui.hyperlink_to(format!("Source - {}", source.name), &source.url);
            }
        });
    }
}

impl PageView for OrganizationProfileView {
    fn route_path(&self) -> &str {
        &self.route_path
    }

    fn title(&self) -> &str {
        self.record
            .as_ref()
            .map(|org| org.name.as_str())
            .unwrap_or("Organization")
    }

    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui) {
        self.ensure_loaded(ctx);

        if let Some(message) = &self.error {
            ui.colored_label(ds_ui::error_color(), message);
            if ui.link("Back to all organizations").clicked() {
                ctx.request_navigation("/organizations");
            }
            return;
        }
        let Some(org) = self.record.clone() else {
            return;
        };

        egui::ScrollArea::vertical()
            .id_builder(WidgetId::new("organization_profile").with(&self.slug))
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    let main_width = (ui.available_width() * 0.6).max(320.0);
                    ui.vertical(|ui| {
                        ui.set_width(main_width);

                        self.show_header(ui, &org);
                        ui.add_space(12.0);

                        if let Some(carousel) = &mut self.carousel {
                            carousel.ui(ui);
                            ui.add_space(12.0);
                        }

                        // Skip the about text when it just repeats the tagline
                        if let Some(about) = &org.about {
                            if org.tagline.as_deref() != Some(about.as_str()) {
                                ui.label(about);
                            }
                        }
                    });

                    ui.separator();
                    ui.vertical(|ui| self.show_sidebar(ui, &org));
                });
            });
    }
}

fn sidebar_section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    ui.label(RichText::new(title).strong());
    ui.add_space(2.0);
    add_contents(ui);
    ui.add_space(12.0);
}
