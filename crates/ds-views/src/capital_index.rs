//! Capital index page
//!
//! Lists the organizations playing the Capital role, with their capital
//! profile summarized under each card.

use egui::{RichText, Ui};
use tracing::error;

use ds_content::transform;
use ds_core::directory::Organization;
use ds_ui::{organization_card, widget_id, ScrollAreaExt, WidgetId};

use crate::{PageView, SiteContext};

/// Index of capital providers
pub struct CapitalIndexView {
    route_path: String,
    records: Option<Vec<Organization>>,
    error: Option<String>,
}

impl CapitalIndexView {
    pub fn new(route_path: impl Into<String>) -> Self {
        Self {
            route_path: route_path.into(),
            records: None,
            error: None,
        }
    }

    fn ensure_loaded(&mut self, ctx: &SiteContext) {
        if self.records.is_some() || self.error.is_some() {
            return;
        }
        match ctx.load_organizations() {
            Ok(organizations) => {
                let deduped = transform::dedupe_organizations(organizations);
                self.records = Some(transform::capital_organizations(&deduped));
            }
            Err(err) => {
                error!("failed to load capital index: {err:#}");
                self.error = Some(err.to_string());
            }
        }
    }
}

impl PageView for CapitalIndexView {
    fn route_path(&self) -> &str {
        &self.route_path
    }

    fn title(&self) -> &str {
        "Climate Capital"
    }

    fn ui(&mut self, ctx: &SiteContext, ui: &mut Ui) {
        self.ensure_loaded(ctx);

        if let Some(message) = &self.error {
            ui.colored_label(ds_ui::error_color(), message);
            return;
        }
        let Some(records) = &self.records else {
            return;
        };

        let filter = ctx.filter.read().clone();
        let visible = filter.apply(records);

        let mut open_profile = None;
        let mut filter_action = None;

        egui::ScrollArea::vertical()
            .id_builder(WidgetId::new("capital_index"))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Climate Capital");
                    ui.label(
                        RichText::new(format!("{} providers", visible.len()))
                            .color(ds_ui::muted_text_color()),
                    );
                    if filter.is_active() && ui.button("Clear filter").clicked() {
                        ctx.filter.write().clear();
                    }
                });
                ui.separator();

                for (idx, org) in visible.iter().enumerate() {
                    ui.push_id(widget_id("capital_card", idx), |ui| {
                        let card = organization_card(ui, org, &filter);
                        if card.open_profile {
                            open_profile = Some(org.profile_path());
                        }
                        if card.filter_action.is_some() {
                            filter_action = card.filter_action;
                        }

                        if let Some(profile) = &org.capital_profile {
                            let mut parts: Vec<&str> = Vec::new();
                            parts.extend(profile.capital_type.iter().map(String::as_str));
                            parts.extend(profile.stage.iter().map(String::as_str));
                            parts.extend(profile.check_size.iter().map(String::as_str));
                            if !parts.is_empty() {
                                ui.label(
                                    RichText::new(parts.join(" · "))
                                        .small()
                                        .color(ds_ui::muted_text_color()),
                                );
                            }
                        }
                    });
                    ui.separator();
                }
            });

        if let Some(path) = open_profile {
            ctx.request_navigation(path);
        }
        if let Some(action) = filter_action {
            ctx.filter.write().toggle(action);
        }
    }
}
