//! Organization index page
//!
//! Lists organizations as cards with a sector sidebar and the filter
//! header. Serves both the all-organizations page and the per-sector pages;
//! the only difference is the sector the record set is narrowed to.

use egui::{RichText, Ui};
use tracing::error;

use ds_content::transform;
use ds_core::directory::{Organization, Sector};
use ds_ui::{organization_card, widget_id, ScrollAreaExt, WidgetId};

use crate::{PageView, SiteContext};

const ADD_ORGANIZATION_FORM_URL: &str = "https://airtable.com/shrdTLRMLvFLtKnUw";

/// Index of organizations, optionally narrowed to one sector
pub struct OrganizationIndexView {
    route_path: String,
    title: String,
    sector: Option<Sector>,
    records: Option<Vec<Organization>>,
    sector_counts: Vec<(Sector, usize)>,
    error: Option<String>,
}

impl OrganizationIndexView {
    pub fn new(route_path: impl Into<String>, sector: Option<Sector>) -> Self {
        let title = sector
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "All Organizations".to_string());
        Self {
            route_path: route_path.into(),
            title,
            sector,
            records: None,
            sector_counts: Vec::new(),
            error: None,
        }
    }

    fn ensure_loaded(&mut self, ctx: &SiteContext) {
        if self.records.is_some() || self.error.is_some() {
            return;
        }
        let loaded = ctx
            .load_organizations()
            .and_then(|orgs| ctx.load_sectors().map(|sectors| (orgs, sectors)));
        match loaded {
            Ok((organizations, sectors)) => {
                // Sector queries combine top- and sub-category matches and
                // may return the same organization twice
                let all = transform::dedupe_organizations(organizations);

                self.sector_counts = sectors
                    .into_iter()
                    .map(|sector| {
                        let count = all.iter().filter(|org| in_sector(org, &sector)).count();
                        (sector, count)
                    })
                    .collect();

                let mut records = all;
                if let Some(sector) = &self.sector {
                    records.retain(|org| in_sector(org, sector));
                }
                self.records = Some(records);
            }
            Err(err) => {
                error!("failed to load organization index: {err:#}");
                self.error = Some(err.to_string());
            }
        }
    }

    fn sector_sidebar(&self, ctx: &SiteContext, ui: &mut Ui) {
        ui.set_width(200.0);
        ui.label(RichText::new("Sectors").strong());
        ui.add_space(4.0);

        for (sector, count) in &self.sector_counts {
            let selected = self.sector.as_ref() == Some(sector);
            let label = format!("{} ({})", sector.name, count);
            if ui.selectable_label(selected, label).clicked() {
                ctx.request_navigation(format!("/sectors/{}", sector.slug));
            }
        }
        if self.sector.is_some() && ui.link("All organizations").clicked() {
            ctx.request_navigation("/organizations");
        }
    }

    fn index_header(&self, ctx: &SiteContext, ui: &mut Ui, shown: usize) {
        ui.horizontal(|ui| {
            ui.heading(&self.title);
            ui.label(
                RichText::new(format!("{shown} organizations"))
                    .color(ds_ui::muted_text_color()),
            );

            let filter_active = ctx.filter.read().is_active();
            if filter_active && ui.button("Clear filter").clicked() {
                ctx.filter.write().clear();
            }
        });
        ui.separator();
    }
}

impl PageView for OrganizationIndexView {
    fn route_path(&self) -> &str {
        &self.route_path
    }

    fn title(&self) -> &str {
        &self.title
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
            .id_builder(WidgetId::new("organization_index").with(&self.route_path))
            .show(ui, |ui| {
                ui.horizontal_top(|ui| {
                    self.sector_sidebar(ctx, ui);
                    ui.separator();

                    ui.vertical(|ui| {
                        self.index_header(ctx, ui, visible.len());

                        for (idx, org) in visible.iter().enumerate() {
                            ui.push_id(widget_id("org_card", idx), |ui| {
                                let card = organization_card(ui, org, &filter);
                                if card.open_profile {
                                    open_profile = Some(org.profile_path());
                                }
                                if card.filter_action.is_some() {
                                    filter_action = card.filter_action;
                                }
                            });
                            ui.separator();
                        }

                        ui.add_space(16.0);
                        ui.vertical_centered(|ui| {
                            ui.hyperlink_to(
                                "Add or edit an organization",
                                ADD_ORGANIZATION_FORM_URL,
                            );
                        });
                    });
                });
            });

        if let Some(path) = open_profile {
            ctx.request_navigation(path);
        }
        if let Some(action) = filter_action {
            ctx.filter.write().toggle(action);
        }
    }
}

fn in_sector(org: &Organization, sector: &Sector) -> bool {
    org.categories.iter().any(|category| {
        category.name == sector.name || category.parent.as_deref() == Some(&sector.name)
    })
}
