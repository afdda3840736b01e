//! Organization list row

use egui::{Color32, Rounding, Stroke, Ui, Vec2};

use ds_content::filter::{FilterAction, OrganizationFilter};
use ds_content::transform::display_logo;
use ds_core::directory::{Organization, Sector};

use crate::theme;

/// What a card row reported back
#[derive(Default)]
pub struct CardResponse {
    /// The title or logo was clicked: open the profile page
    pub open_profile: bool,
    /// A filter chip was clicked
    pub filter_action: Option<FilterAction>,
}

/// Render one organization row for an index page
pub fn organization_card(
    ui: &mut Ui,
    org: &Organization,
    current_filter: &OrganizationFilter,
) -> CardResponse {
    let mut response = CardResponse::default();

    egui::Frame::none()
        .fill(Color32::WHITE)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if let Some(logo) = display_logo(org) {
                    let image = egui::Image::from_uri(logo.to_string())
                        .fit_to_exact_size(Vec2::splat(48.0))
                        .rounding(Rounding::same(4.0));
                    if ui.add(egui::ImageButton::new(image).frame(false)).clicked() {
                        response.open_profile = true;
                    }
                }

                ui.vertical(|ui| {
                    ui.horizontal_wrapped(|ui| {
                        if ui.link(egui::RichText::new(&org.name).strong()).clicked() {
                            response.open_profile = true;
                        }
                        if let Some(tagline) = &org.tagline {
                            ui.label(
                                egui::RichText::new(tagline).color(theme::muted_text_color()),
                            );
                        }
                    });

                    ui.horizontal_wrapped(|ui| {
                        show_chips(ui, org, current_filter, &mut response);
                    });
                });
            });
        });

    response
}

fn show_chips(
    ui: &mut Ui,
    org: &Organization,
    current: &OrganizationFilter,
    response: &mut CardResponse,
) {
    // The first top-level category doubles as the sector chip
    if let Some(category) = org.categories.iter().find(|c| c.is_top_level()) {
        let sector = Sector::new(&category.name);
        let active = current.by_sector.as_ref() == Some(&sector);
        if chip(ui, &category.name, active).clicked() {
            response.filter_action = Some(FilterAction::Sector(sector));
        }
    }

    for tag in &org.tags {
        let active = current.by_tag.as_deref() == Some(tag);
        if chip(ui, tag, active).clicked() {
            response.filter_action = Some(FilterAction::Tag(tag.clone()));
        }
    }

    if let Some(location) = &org.hq_location {
        let active = current.by_location.as_deref() == Some(location);
        if chip(ui, location, active).clicked() {
            response.filter_action = Some(FilterAction::Location(location.clone()));
        }
    }

    if let Some(headcount) = &org.headcount {
        let active = current.by_headcount.as_deref() == Some(headcount);
        if chip(ui, &format!("{headcount} employees"), active).clicked() {
            response.filter_action = Some(FilterAction::Headcount(headcount.clone()));
        }
    }

    if let Some(org_type) = &org.organization_type {
        let active = current.by_org_type.as_deref() == Some(org_type);
        if chip(ui, org_type, active).clicked() {
            response.filter_action = Some(FilterAction::OrgType(org_type.clone()));
        }
    }
}

fn chip(ui: &mut Ui, text: &str, active: bool) -> egui::Response {
    let fill = if active {
        theme::accent_color()
    } else {
        ui.visuals().faint_bg_color
    };
    let text_color = if active {
        Color32::WHITE
    } else {
        ui.visuals().text_color()
    };
    ui.add(
        egui::Button::new(egui::RichText::new(text).size(11.0).color(text_color))
            .fill(fill)
            .rounding(Rounding::same(10.0))
            .stroke(Stroke::NONE),
    )
}
